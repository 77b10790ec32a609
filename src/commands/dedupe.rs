use clap::Args;
use serde::Serialize;

use helpkit::{dedupe_adjacent, sort};

use super::CmdResult;

#[derive(Args)]
pub struct DedupeArgs {
    /// Values to dedupe. Only adjacent repeats are removed unless --sort is given.
    pub values: Vec<String>,

    /// Sort case-insensitively first so every repeat becomes adjacent
    #[arg(long)]
    pub sort: bool,
}

#[derive(Debug, Serialize)]
pub struct DedupeOutput {
    pub input: Vec<String>,
    pub sorted: bool,
    pub deduped: Vec<String>,
}

pub fn run_json(args: DedupeArgs) -> CmdResult<DedupeOutput> {
    let deduped = if args.sort && !args.values.is_empty() {
        dedupe_adjacent(&sort::sorted(&args.values, true)?)
    } else {
        dedupe_adjacent(&args.values)
    };

    Ok((
        DedupeOutput {
            input: args.values,
            sorted: args.sort,
            deduped,
        },
        0,
    ))
}
