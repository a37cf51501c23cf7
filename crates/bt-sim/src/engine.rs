//! The `Simulation` struct: one-time initialization plus the per-cycle
//! snapshot → relocation → resolution state machine.

use bt_core::{BtError, BtResult, Cell, CellCounts, SimConfig, SimRng};
use bt_grid::{Grid, generate, happiness, is_contented, shuffle};

use crate::{Control, CycleObserver};

// ── Cycle statistics ─────────────────────────────────────────────────────────

/// Statistics paired with the grid an observer sees for one cycle.
#[derive(Copy, Clone, Debug)]
pub struct CycleStats {
    /// Cycle number, starting at 0 for the initial unrun state.
    pub cycle: u64,

    /// Relocations that produced the observed grid (0 for cycle 0).
    pub moves: usize,

    /// Raw happiness summed over *all* cells of the observed grid; vacant
    /// cells contribute their defined 0.
    pub aggregate_happiness: f64,

    /// `aggregate_happiness / occupied`, where `occupied` is the count
    /// fixed at initialization.  Computed here, once, so every renderer
    /// reports the same quotient.
    pub mean_happiness: f64,
}

// ── Pre-move snapshot ────────────────────────────────────────────────────────

/// Happiness snapshot taken before any relocation in a cycle.  Moves are
/// decided against this, never against mid-cycle state.
struct HappinessSnapshot {
    contented: Vec<bool>,
    aggregate: f64,
}

// ── Simulation ───────────────────────────────────────────────────────────────

/// The cycle engine.  Owns the grid for the life of the run and mutates it
/// in place, one full cycle at a time.
pub struct Simulation {
    config: SimConfig,
    counts: CellCounts,
    grid: Grid,
    cycle: u64,
    /// Relocations performed by the previous cycle; reported alongside the
    /// grid they produced.
    last_moves: usize,
}

impl Simulation {
    /// Generate, shuffle, and lay out the initial population.
    pub fn new(config: SimConfig, rng: &mut SimRng) -> BtResult<Self> {
        config.validate()?;
        let counts = config.counts();
        let mut pool = generate(&counts);
        shuffle(&mut pool, rng);
        let grid = Grid::from_pool(config.dimension, pool)?;
        Ok(Self { config, counts, grid, cycle: 0, last_moves: 0 })
    }

    /// Wrap an existing grid instead of generating one.  The grid's current
    /// tally becomes the conserved population (and the happiness divisor).
    pub fn from_grid(config: SimConfig, grid: Grid) -> BtResult<Self> {
        config.validate()?;
        if grid.dimension() != config.dimension {
            return Err(BtError::Config(format!(
                "grid dimension ({}) does not match configuration ({})",
                grid.dimension(),
                config.dimension
            )));
        }
        let counts = grid.counts();
        Ok(Self { config, counts, grid, cycle: 0, last_moves: 0 })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Cell proportions fixed at initialization.  Relocation only permutes
    /// occupancy, so the live grid tallies back to these after every cycle.
    #[inline]
    pub fn counts(&self) -> CellCounts {
        self.counts
    }

    /// The next cycle number `step` will report.
    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one full cycle: snapshot, observer callback, relocation,
    /// resolution.  Returns the observer's flow decision.
    pub fn step<O: CycleObserver>(&mut self, observer: &mut O) -> Control {
        // ── Phase 1: snapshot happiness of the current grid ──────────────
        let snapshot = self.snapshot_phase();

        let stats = CycleStats {
            cycle: self.cycle,
            moves: self.last_moves,
            aggregate_happiness: snapshot.aggregate,
            mean_happiness: snapshot.aggregate / self.counts.occupied() as f64,
        };
        let control = observer.on_cycle(&self.grid, &stats);

        // ── Phases 2 + 3: relocate against the snapshot, then resolve ────
        self.last_moves = self.relocation_phase(&snapshot.contented);
        self.cycle += 1;
        control
    }

    /// Drive the engine to completion: `cycle_limit + 1` observer calls
    /// (cycle 0 is the initial state), or forever until the observer stops
    /// the run.
    pub fn run<O: CycleObserver>(&mut self, observer: &mut O) {
        loop {
            if let Some(limit) = self.config.cycle_limit {
                if self.cycle > limit {
                    break;
                }
            }
            if self.step(observer) == Control::Stop {
                break;
            }
        }
        observer.on_run_end(self.cycle);
    }

    // ── Phase 1: snapshot ─────────────────────────────────────────────────

    /// Evaluate every cell of the pre-move grid in row-major order.  Vacant
    /// cells contribute 0 to the aggregate and are recorded as not
    /// contented, though the relocation phase never consults them.
    fn snapshot_phase(&self) -> HappinessSnapshot {
        let dim = self.grid.dimension();
        let mut contented = vec![false; self.grid.len()];
        let mut aggregate = 0.0;

        for row in 0..dim {
            for col in 0..dim {
                let h = happiness(&self.grid, row, col);
                aggregate += h;
                if self.grid.get(row, col).is_occupied() {
                    contented[row * dim + col] =
                        is_contented(h, self.config.strength_percent);
                }
            }
        }

        HappinessSnapshot { contented, aggregate }
    }

    // ── Phases 2 + 3: relocation and resolution ───────────────────────────

    /// Move every discontented occupant (at most once each) to the first
    /// vacant cell in row-major order, then resolve the transient markers.
    /// Returns the number of successful relocations.
    ///
    /// `freed` sources keep their occupant value until resolution, so they
    /// are not relocation targets within the same cycle; `moved`
    /// destinations are skipped by the scan, so nobody relocates twice.
    fn relocation_phase(&mut self, contented: &[bool]) -> usize {
        let len = self.grid.len();
        let mut freed = vec![false; len];
        let mut moved = vec![false; len];

        for src in 0..len {
            let Cell::Occupied(style) = self.grid.cell(src) else {
                continue;
            };
            if moved[src] || contented[src] {
                continue;
            }
            // Greedy first-found target.  A grid with no vacancy left
            // leaves the occupant in place; that is a defined no-op, not
            // an error.
            if let Some(dst) = self.grid.first_vacancy() {
                self.grid.set_cell(dst, Cell::Occupied(style));
                moved[dst] = true;
                freed[src] = true;
            }
        }

        // Resolution: freed cells become vacant and their count is this
        // cycle's move total.  The moved marks expire with this function,
        // leaving relocated occupants eligible again next cycle.
        let mut moves = 0;
        for (i, &was_freed) in freed.iter().enumerate() {
            if was_freed {
                self.grid.set_cell(i, Cell::Vacant);
                moves += 1;
            }
        }
        moves
    }
}
