use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use helpkit::{log_status, random, validation};

use super::CmdResult;

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct RandomArgs {
    /// Lowest possible value (inclusive)
    pub lower: i64,

    /// Highest possible value (inclusive)
    pub upper: i64,

    /// Seed the generator for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of values to draw
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomOutput {
    pub lower: i64,
    pub upper: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub values: Vec<i64>,
}

pub fn run(args: RandomArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RandomOutput> {
    validation::require_ordered(args.lower, args.upper, "range")?;

    let values = match args.seed {
        Some(seed) => {
            log_status!("random", "Seeded generator with {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count)
                .map(|_| random::between_with(&mut rng, args.lower, args.upper))
                .collect::<helpkit::Result<Vec<_>>>()?
        }
        None => (0..args.count)
            .map(|_| random::between(args.lower, args.upper))
            .collect::<helpkit::Result<Vec<_>>>()?,
    };

    Ok((
        RandomOutput {
            lower: args.lower,
            upper: args.upper,
            seed: args.seed,
            values,
        },
        0,
    ))
}
