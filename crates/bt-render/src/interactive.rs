//! Full-screen interactive renderer.
//!
//! Redraws the grid and statistics once per cycle on the alternate screen,
//! then sleeps the configured delay while polling for a quit key.  Raw mode
//! swallows SIGINT, so Control-C arrives as a key event and is translated
//! into [`Control::Stop`]; the terminal is restored when the renderer is
//! dropped.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};

use bt_core::SimConfig;
use bt_grid::Grid;
use bt_sim::{Control, CycleObserver, CycleStats};

use crate::stats::stat_lines;
use crate::{RenderError, RenderResult};

/// A [`CycleObserver`] that drives a live terminal view.
pub struct InteractiveRenderer {
    out: Stdout,
    config: SimConfig,
    delay: Duration,
    last_error: Option<RenderError>,
}

impl InteractiveRenderer {
    /// Enter the alternate screen and raw mode.  Both are restored on drop.
    pub fn new(config: SimConfig, delay: Duration) -> RenderResult<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out, config, delay, last_error: None })
    }

    /// Take the stored terminal error (if any) after the run.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.last_error.take()
    }

    fn draw(&mut self, grid: &Grid, stats: &CycleStats) -> RenderResult<()> {
        queue!(self.out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;

        let mut line = 0u16;
        for row in grid.rows() {
            let mut text = String::with_capacity(row.len() * 2);
            for cell in row {
                text.push(cell.symbol());
                text.push(' ');
            }
            queue!(self.out, cursor::MoveTo(0, line), Print(text))?;
            line += 1;
        }

        for stat in stat_lines(&self.config, stats) {
            queue!(self.out, cursor::MoveTo(0, line), Print(stat))?;
            line += 1;
        }
        queue!(
            self.out,
            cursor::MoveTo(0, line),
            Print("Use Control-C to quit.")
        )?;

        self.out.flush()?;
        Ok(())
    }

    /// Sleep out the inter-cycle delay, returning `true` early if the user
    /// asked to quit (Control-C, `q`, or Escape).
    fn pause_for_quit(&mut self) -> RenderResult<bool> {
        let deadline = Instant::now() + self.delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(false); // delay elapsed with no input
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(true);
                    }
                }
            }
            if deadline <= Instant::now() {
                return Ok(false);
            }
        }
    }
}

impl CycleObserver for InteractiveRenderer {
    fn on_cycle(&mut self, grid: &Grid, stats: &CycleStats) -> Control {
        let outcome = self.draw(grid, stats).and_then(|()| self.pause_for_quit());
        match outcome {
            Ok(false) => Control::Continue,
            Ok(true) => Control::Stop,
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
                Control::Stop
            }
        }
    }
}

impl Drop for InteractiveRenderer {
    /// Best-effort restore; errors here have nowhere useful to go.
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
