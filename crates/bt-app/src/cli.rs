//! Command-line interface.
//!
//! Short options mirror the traditional knobs: delay, cycle count,
//! dimension, strength, vacancy, endline split.  Ranges are enforced by
//! clap before the simulation is constructed, so the core never sees an
//! invalid configuration.

use clap::Parser;

use bt_core::SimConfig;

/// A Schelling-style simulation of programmers segregating by brace style.
#[derive(Parser, Debug)]
#[command(name = "bracetopia", version, about)]
pub struct Cli {
    /// Microseconds to pause between cycles (interactive mode only).
    #[arg(short = 't', long = "delay", value_name = "USEC", default_value_t = 900_000)]
    pub delay_usec: u64,

    /// Run in batch mode for this many cycles; cycle 0 is the initial
    /// state, so N produces N+1 snapshots.  Absent: interactive mode.
    #[arg(short = 'c', long = "cycles", value_name = "N")]
    pub cycle_limit: Option<u64>,

    /// Width and height of the grid.
    #[arg(
        short = 'd',
        long = "dimension",
        value_name = "DIM",
        default_value_t = 15,
        value_parser = clap::value_parser!(u16).range(5..=39)
    )]
    pub dimension: u16,

    /// Strength of preference: the minimum percentage of same-style
    /// neighbors an agent needs to stay put.
    #[arg(
        short = 's',
        long = "strength",
        value_name = "PCT",
        default_value_t = 50,
        value_parser = clap::value_parser!(u8).range(1..=99)
    )]
    pub strength: u8,

    /// Percentage of cells left vacant.
    #[arg(
        short = 'v',
        long = "vacancy",
        value_name = "PCT",
        default_value_t = 20,
        value_parser = clap::value_parser!(u8).range(1..=99)
    )]
    pub vacancy: u8,

    /// Percentage of agents preferring endline braces; the rest prefer
    /// newline.
    #[arg(
        short = 'e',
        long = "endline",
        value_name = "PCT",
        default_value_t = 60,
        value_parser = clap::value_parser!(u8).range(1..=99)
    )]
    pub endline: u8,

    /// RNG seed for reproducible runs.  Defaults to OS entropy.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    /// Assemble the immutable run configuration, drawing a fresh seed when
    /// none was given.
    pub fn to_config(&self) -> SimConfig {
        SimConfig {
            dimension: usize::from(self.dimension),
            vacancy_percent: self.vacancy,
            endline_percent: self.endline,
            strength_percent: self.strength,
            seed: self.seed.unwrap_or_else(rand::random),
            cycle_limit: self.cycle_limit,
        }
    }
}
