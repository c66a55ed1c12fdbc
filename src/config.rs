use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::weight::{CyclingWeights, RandomWeights, Weight, WeightSource};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(version, about = "A console-based seesaw torque-balance demo")]
pub struct Args {
    /// Seed for the random weight generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Weights to cycle through instead of random ones, e.g. 5,4,10
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(1..=10),
        conflicts_with = "seed"
    )]
    pub weights: Vec<u8>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the debug overlay shown
    #[arg(long)]
    pub debug: bool,
}

/// Where the weights of new objects come from
#[derive(Clone, Debug, PartialEq)]
pub enum WeightMode {
    Random { seed: Option<u64> },
    Scripted(Vec<Weight>),
}

/// Validated runtime configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub weights: WeightMode,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let weights = if args.weights.is_empty() {
            WeightMode::Random { seed: args.seed }
        } else {
            let weights = args
                .weights
                .into_iter()
                .map(Weight::new)
                .collect::<Result<Vec<_>>>()?;
            WeightMode::Scripted(weights)
        };

        Ok(Config {
            weights,
            log_file: args.log_file,
            debug: args.debug,
        })
    }

    pub fn weight_source(&self) -> Result<Box<dyn WeightSource>> {
        let source: Box<dyn WeightSource> = match &self.weights {
            WeightMode::Random { seed: Some(seed) } => Box::new(RandomWeights::seeded(*seed)),
            WeightMode::Random { seed: None } => Box::new(RandomWeights::new()),
            WeightMode::Scripted(weights) => Box::new(CyclingWeights::new(weights.clone())?),
        };
        Ok(source)
    }
}
