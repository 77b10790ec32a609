use clap::{Args, Subcommand};
use serde::Serialize;

use helpkit::error::codes;
use helpkit::error::help::{self, ErrorHelp, ErrorHelpSummary};

use super::CmdResult;

#[derive(Args)]
pub struct ErrorArgs {
    #[command(subcommand)]
    command: ErrorCommand,
}

#[derive(Subcommand)]
enum ErrorCommand {
    /// List every error code with a one-line summary
    Codes,
    /// Explain one error code (e.g. validation.invalid_argument)
    Explain {
        /// Error code
        code: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorOutput {
    Codes(Vec<ErrorHelpSummary>),
    Explain(ErrorHelp),
}

pub fn run_json(args: ErrorArgs) -> CmdResult<ErrorOutput> {
    match args.command {
        ErrorCommand::Codes => Ok((ErrorOutput::Codes(help::list()), 0)),
        ErrorCommand::Explain { code } => {
            let parsed = codes::parse_code(&code)
                .ok_or_else(|| helpkit::Error::validation_unknown_error_code(code))?;
            Ok((ErrorOutput::Explain(help::explain(parsed)), 0))
        }
    }
}
