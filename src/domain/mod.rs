//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep state-file and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or clock side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect both `--json` outputs and the state files
//! under `~/.config/safepath/`. Keep schema-impacting changes explicit and
//! synchronized with `docs/contracts/*`.

pub mod models;
