//! `bt-core` — foundational types for the `bracetopia` simulation.
//!
//! This crate is a dependency of every other `bt-*` crate.  It intentionally
//! has no `bt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`cell`]    | `Cell`, `Style`                                  |
//! | [`config`]  | `SimConfig`, derived `CellCounts`                |
//! | [`rng`]     | `SimRng` (seed-once simulation RNG)              |
//! | [`error`]   | `BtError`, `BtResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Style};
pub use config::{CellCounts, SimConfig};
pub use error::{BtError, BtResult};
pub use rng::SimRng;
