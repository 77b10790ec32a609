use clap::Args;
use serde::Serialize;

use super::CmdResult;

#[derive(Args)]
pub struct CapitalizeArgs {
    /// Text whose first character should be upper-cased
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CapitalizeOutput {
    pub input: String,
    pub output: String,
}

pub fn run_json(args: CapitalizeArgs) -> CmdResult<CapitalizeOutput> {
    let output = helpkit::capitalize(&args.text);
    Ok((
        CapitalizeOutput {
            input: args.text,
            output,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_text() {
        let (out, code) = run_json(CapitalizeArgs {
            text: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(out.output, "Abc");
        assert_eq!(code, 0);
    }
}
