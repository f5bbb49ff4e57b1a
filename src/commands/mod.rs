//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `account.rs` — login/logout/whoami.
//! - `assess.rs` — the home-screen threat assessment.
//! - `map.rs` — map session + area catalog commands.
//! - `contacts.rs` — emergency contact book commands.
//! - `profile.rs` — safety profile commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod account;
pub mod assess;
pub mod contacts;
pub mod map;
pub mod profile;

pub use account::handle_account_commands;
pub use assess::handle_assess;
pub use contacts::handle_contact_commands;
pub use map::{handle_area_commands, handle_map_commands};
pub use profile::handle_profile_commands;
