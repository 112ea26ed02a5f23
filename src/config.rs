//! Command-line configuration

use crate::buffer::{Distribution, Order};
use crate::driver::constants::{DEFAULT_BARS, DEFAULT_TICK_RATE};
use crate::driver::Settings;
use crate::errors::AppError;
use crate::sorting::Algorithm;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;

/// Watch sorting algorithms work, one step at a time
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
pub struct Config {
    /// Number of bars (clamped to 4..=256)
    #[arg(short, long, default_value_t = DEFAULT_BARS)]
    pub bars: usize,

    /// Steps per second (clamped to 4..=256)
    #[arg(short, long, default_value_t = DEFAULT_TICK_RATE)]
    pub tick: u32,

    /// Algorithm selected at startup
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Sort largest first
    #[arg(short, long)]
    pub descending: bool,

    /// How fresh buffers are filled
    #[arg(long, value_enum, default_value_t = DistributionArg::Permutation)]
    pub distribution: DistributionArg,

    /// Seed for buffer generation and crazy sort (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file; level comes from RUST_LOG (default: info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionArg {
    /// Distinct evenly spaced values, shuffled
    Permutation,
    /// Random values, duplicates allowed
    Uniform,
}

impl From<DistributionArg> for Distribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Permutation => Distribution::Permutation,
            DistributionArg::Uniform => Distribution::Uniform,
        }
    }
}

impl Config {
    pub fn settings(&self) -> Settings {
        Settings {
            bars: self.bars,
            tick_rate: self.tick,
            algorithm: self.algorithm,
            order: if self.descending {
                Order::Descending
            } else {
                Order::Ascending
            },
            distribution: self.distribution.into(),
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }

    /// Install the file logger if `--log-file` was given.
    ///
    /// Stdout belongs to the TUI, so without a file nothing is logged.
    pub fn init_logging(&self) -> Result<(), AppError> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path).map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["sortty"]);
        let settings = config.settings();
        assert_eq!(settings.bars, DEFAULT_BARS);
        assert_eq!(settings.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(settings.algorithm, Algorithm::Bubble);
        assert_eq!(settings.order, Order::Ascending);
        assert_eq!(settings.distribution, Distribution::Permutation);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from([
            "sortty",
            "--bars",
            "1000",
            "--algorithm",
            "quick",
            "--descending",
            "--distribution",
            "uniform",
            "--seed",
            "9",
        ]);
        let settings = config.settings();
        // clamping happens in the driver, not here
        assert_eq!(settings.bars, 1000);
        assert_eq!(settings.algorithm, Algorithm::Quick);
        assert_eq!(settings.order, Order::Descending);
        assert_eq!(settings.distribution, Distribution::Uniform);
        assert_eq!(settings.seed, 9);
    }
}
