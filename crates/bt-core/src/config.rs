//! Run configuration and the cell proportions derived from it.
//!
//! # Truncation order
//!
//! Derived counts use integer floor division, vacancy first:
//!
//! ```text
//! total    = dimension²
//! vacant   = total * vacancy_percent / 100
//! occupied = total − vacant
//! endline  = occupied * endline_percent / 100
//! newline  = occupied − endline
//! ```
//!
//! `vacant + endline + newline == total` holds exactly for every input
//! because each truncation operates on the previous step's remainder.

use crate::{BtError, BtResult};

/// Inclusive bounds for the grid side length.
pub const DIMENSION_RANGE: std::ops::RangeInclusive<usize> = 5..=39;

/// Inclusive bounds for every percentage knob.
pub const PERCENT_RANGE: std::ops::RangeInclusive<u8> = 1..=99;

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration, immutable for the run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid side length; the grid has `dimension * dimension` cells.
    pub dimension: usize,

    /// Percentage of cells left vacant.
    pub vacancy_percent: u8,

    /// Percentage of occupants preferring endline braces; the rest prefer
    /// newline.
    pub endline_percent: u8,

    /// Minimum same-style neighbor percentage an occupant needs to be
    /// contented.
    pub strength_percent: u8,

    /// Master RNG seed.  The same seed always produces an identical run.
    pub seed: u64,

    /// Number of cycles in batch mode; `None` runs until interrupted.
    pub cycle_limit: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dimension: 15,
            vacancy_percent: 20,
            endline_percent: 60,
            strength_percent: 50,
            seed: 0,
            cycle_limit: None,
        }
    }
}

impl SimConfig {
    /// Check every knob against its documented range.
    pub fn validate(&self) -> BtResult<()> {
        if !DIMENSION_RANGE.contains(&self.dimension) {
            return Err(BtError::Config(format!(
                "dimension ({}) must be a value in [5...39]",
                self.dimension
            )));
        }
        for (name, value) in [
            ("preference strength", self.strength_percent),
            ("vacancy", self.vacancy_percent),
            ("endline proportion", self.endline_percent),
        ] {
            if !PERCENT_RANGE.contains(&value) {
                return Err(BtError::Config(format!(
                    "{name} ({value}) must be a value in [1...99]"
                )));
            }
        }
        Ok(())
    }

    /// Total number of grid cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Derive the exact cell proportions for this configuration.
    pub fn counts(&self) -> CellCounts {
        CellCounts::derive(self.total_cells(), self.vacancy_percent, self.endline_percent)
    }
}

// ── CellCounts ────────────────────────────────────────────────────────────────

/// Exact cell proportions for one run: how many vacant, endline, and newline
/// cells the grid holds.  Relocation permutes occupancy but never changes
/// these counts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCounts {
    pub total: usize,
    pub vacant: usize,
    pub endline: usize,
    pub newline: usize,
}

impl CellCounts {
    /// Derive counts by integer floor division: vacancy is truncated first,
    /// then the style split of the remaining occupants.
    pub fn derive(total: usize, vacancy_percent: u8, endline_percent: u8) -> Self {
        let vacant = total * vacancy_percent as usize / 100;
        let occupied = total - vacant;
        let endline = occupied * endline_percent as usize / 100;
        let newline = occupied - endline;
        Self { total, vacant, endline, newline }
    }

    /// Number of occupied cells (both styles).
    #[inline]
    pub fn occupied(&self) -> usize {
        self.endline + self.newline
    }
}
