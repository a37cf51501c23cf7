//! Cycle observer trait for rendering and data collection.

use bt_grid::Grid;

use crate::CycleStats;

/// Whether the run loop should keep going after an observer callback.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    /// Stop the run after the current cycle.  Interactive renderers return
    /// this for the quit key; batch runs normally end via the cycle limit
    /// instead.
    Stop,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] once per
/// cycle.
///
/// `on_cycle` sees the grid *before* this cycle's relocations, together with
/// the statistics describing it; `stats.moves` is the relocation count that
/// produced this grid (0 for cycle 0).  Implementors that perform I/O should
/// stash failures internally and surface them after the run — the hooks
/// deliberately have no `Result` plumbing.
pub trait CycleObserver {
    /// Called once per cycle with the pre-relocation grid.
    fn on_cycle(&mut self, grid: &Grid, stats: &CycleStats) -> Control {
        let _ = (grid, stats);
        Control::Continue
    }

    /// Called once after the final cycle.
    fn on_run_end(&mut self, final_cycle: u64) {
        let _ = final_cycle;
    }
}

/// A [`CycleObserver`] that does nothing.  Use to drive the engine when only
/// the end state matters (tests, mostly).
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}
