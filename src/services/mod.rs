//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `auth.rs` — simulated login/logout and the protected-command gate.
//! - `search.rs` — catalog search, decoy results, generation-token commit.
//! - `map_session.rs` — area/result selection and rating-card assembly.
//! - `rating.rs` — safety-rating bands, colors, simulated baseline rating.
//! - `assess.rs` — simulated threat-assessment report.
//! - `contacts.rs` — contact book mutations and outbound intents.
//! - `storage.rs` — local state persistence + audit log.
//! - `config.rs` — optional `config.toml` (map defaults, delay simulation).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod assess;
pub mod auth;
pub mod config;
pub mod contacts;
pub mod map_session;
pub mod output;
pub mod rating;
pub mod search;
pub mod storage;
