//! bracetopia — a city of programmers who segregate by brace style.
//!
//! Agents prefer neighbors who share their brace placement; discontented
//! agents relocate once per cycle.  Without `-c` the simulation runs as a
//! live full-screen view until quit; with `-c N` it prints `N + 1` plain
//! text snapshots to stdout.

mod cli;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use bt_core::SimRng;
use bt_render::{BatchRenderer, InteractiveRenderer};
use bt_sim::Simulation;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    let mut rng = SimRng::new(config.seed);
    let mut sim = Simulation::new(config.clone(), &mut rng)?;

    match config.cycle_limit {
        // Batch: a fixed number of snapshots on stdout.
        Some(_) => {
            let stdout = io::stdout().lock();
            let mut renderer = BatchRenderer::new(stdout, config);
            sim.run(&mut renderer);
            if let Some(e) = renderer.take_error() {
                return Err(e.into());
            }
        }

        // Interactive: full-screen view until Control-C or q.
        None => {
            let delay = Duration::from_micros(cli.delay_usec);
            let mut renderer = InteractiveRenderer::new(config, delay)?;
            sim.run(&mut renderer);
            let err = renderer.take_error();
            drop(renderer); // restore the terminal before reporting
            if let Some(e) = err {
                return Err(e.into());
            }
        }
    }

    Ok(())
}
