//! `bt-sim` — cycle engine for the bracetopia simulation.
//!
//! # Cycle state machine
//!
//! ```text
//! per cycle:
//!   ① Snapshot   — happiness + contentment for every cell, row-major,
//!                  against the unmodified grid
//!   ② Relocation — each discontented occupant (at most once) moves to the
//!                  first vacant cell in row-major order
//!   ③ Resolution — freed cells become vacant (their count is this cycle's
//!                  move total); moved markers expire
//! ```
//!
//! The observer sees each grid *before* its relocations, paired with the
//! move count that produced it — cycle 0 is the untouched initial state
//! with a move count of 0.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bt_core::{SimConfig, SimRng};
//! use bt_sim::{NoopObserver, Simulation};
//!
//! let config = SimConfig { cycle_limit: Some(10), ..SimConfig::default() };
//! let mut rng = SimRng::new(config.seed);
//! let mut sim = Simulation::new(config, &mut rng)?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod engine;
pub mod observer;

#[cfg(test)]
mod tests;

pub use engine::{CycleStats, Simulation};
pub use observer::{Control, CycleObserver, NoopObserver};
