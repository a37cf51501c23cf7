//! `bt-grid` — population generation, grid layout, and happiness evaluation
//! for the bracetopia simulation.
//!
//! Initialization pipeline, run once per process:
//!
//! ```text
//! CellCounts ─→ population::generate ─→ population::shuffle ─→ Grid::from_pool
//! ```
//!
//! The cycle engine in `bt-sim` then owns the [`Grid`] for the life of the
//! run and re-evaluates [`happiness`] for every cell each cycle.

pub mod grid;
pub mod happiness;
pub mod population;


pub use grid::Grid;
pub use happiness::{happiness, is_contented};
pub use population::{generate, shuffle};
