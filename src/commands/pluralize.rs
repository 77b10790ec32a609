use clap::Args;
use serde::Serialize;

use super::CmdResult;

#[derive(Args)]
pub struct PluralizeArgs {
    /// Singular nouns to pluralize
    #[arg(required = true)]
    pub nouns: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PluralForm {
    pub singular: String,
    pub plural: String,
}

#[derive(Debug, Serialize)]
pub struct PluralizeOutput {
    pub plurals: Vec<PluralForm>,
}

pub fn run_json(args: PluralizeArgs) -> CmdResult<PluralizeOutput> {
    let plurals = args
        .nouns
        .into_iter()
        .map(|singular| {
            let plural = helpkit::pluralize(&singular)?;
            Ok(PluralForm { singular, plural })
        })
        .collect::<helpkit::Result<Vec<_>>>()?;

    Ok((PluralizeOutput { plurals }, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_every_noun() {
        let (out, _) = run_json(PluralizeArgs {
            nouns: vec!["bus".into(), "chief".into()],
        })
        .unwrap();
        assert_eq!(out.plurals[0].plural, "buses");
        assert_eq!(out.plurals[1].plural, "chiefs");
    }

    #[test]
    fn blank_noun_fails_the_whole_command() {
        let result = run_json(PluralizeArgs {
            nouns: vec!["cat".into(), " ".into()],
        });
        assert!(result.is_err());
    }
}
