//! Plain-text batch renderer.
//!
//! One snapshot per cycle on the underlying writer: `dimension` rows of one
//! symbol per cell, then the statistics block.  Suitable for piping and for
//! golden-output comparison.

use std::io::Write;

use bt_core::SimConfig;
use bt_grid::Grid;
use bt_sim::{Control, CycleObserver, CycleStats};

use crate::stats::stat_lines;
use crate::{RenderError, RenderResult};

/// A [`CycleObserver`] that dumps each cycle as plain text.
///
/// Write errors are stored internally (the observer hooks have no `Result`
/// channel) and reported after the run via [`take_error`][Self::take_error];
/// only the first error is kept.  A failed write also stops the run.
pub struct BatchRenderer<W: Write> {
    out: W,
    config: SimConfig,
    last_error: Option<RenderError>,
}

impl<W: Write> BatchRenderer<W> {
    pub fn new(out: W, config: SimConfig) -> Self {
        Self { out, config, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, grid: &Grid, stats: &CycleStats) -> RenderResult<()> {
        for row in grid.rows() {
            for cell in row {
                write!(self.out, "{}", cell.symbol())?;
            }
            writeln!(self.out)?;
        }
        for line in stat_lines(&self.config, stats) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> CycleObserver for BatchRenderer<W> {
    fn on_cycle(&mut self, grid: &Grid, stats: &CycleStats) -> Control {
        match self.render(grid, stats) {
            Ok(()) => Control::Continue,
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
                Control::Stop
            }
        }
    }

    fn on_run_end(&mut self, _final_cycle: u64) {
        if let Err(e) = self.out.flush() {
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}
