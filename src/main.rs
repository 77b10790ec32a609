use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{ask, capitalize, dedupe, error, person, pluralize, random, sort};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "helpkit")]
#[command(version = VERSION)]
#[command(about = "Text, collection and prompt helpers with JSON output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upper-case the first character of a string
    Capitalize(capitalize::CapitalizeArgs),
    /// Pluralize English nouns with heuristic rules
    Pluralize(pluralize::PluralizeArgs),
    /// Sort strings case-insensitively
    Sort(sort::SortArgs),
    /// Remove adjacent repeats from a (sorted) list
    Dedupe(dedupe::DedupeArgs),
    /// Draw random integers from an inclusive range
    Random(random::RandomArgs),
    /// Normalize a person's name
    Person(person::PersonArgs),
    /// Ask a question and validate the answer
    Ask(ask::AskArgs),
    /// Inspect error codes
    Error(error::ErrorArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        tty::status(&format!("Failed to write response: {}", err));
        return std::process::ExitCode::from(exit_code_to_u8(1));
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
