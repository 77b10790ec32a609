use clap::Args;
use serde::Serialize;

use helpkit::sort;

use super::CmdResult;

#[derive(Args)]
pub struct SortArgs {
    /// Strings to sort (case-insensitive)
    pub values: Vec<String>,

    /// Sort Z to A instead of A to Z
    #[arg(long)]
    pub desc: bool,
}

#[derive(Debug, Serialize)]
pub struct SortOutput {
    pub ascending: bool,
    pub sorted: Vec<String>,
}

pub fn run_json(args: SortArgs) -> CmdResult<SortOutput> {
    let ascending = !args.desc;
    let mut values = args.values;
    sort::sort_in_place(&mut values, ascending)?;

    Ok((
        SortOutput {
            ascending,
            sorted: values,
        },
        0,
    ))
}
