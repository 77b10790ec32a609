use clap::Args;

use helpkit::PersonName;

use super::CmdResult;

#[derive(Args)]
pub struct PersonArgs {
    /// Full name; the last word is the last name (ignored when --first is given)
    pub name: Vec<String>,

    /// Explicit first name
    #[arg(long)]
    pub first: Option<String>,

    /// Explicit last name (used with --first)
    #[arg(long, requires = "first")]
    pub last: Option<String>,

    /// Reassign the full name after construction
    #[arg(long, value_name = "FULL_NAME")]
    pub rename: Option<String>,
}

pub fn run(args: PersonArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<PersonName> {
    let mut person = match &args.first {
        Some(first) => PersonName::new(first, args.last.as_deref().unwrap_or(""))?,
        None if !args.name.is_empty() => PersonName::parse(&args.name.join(" "))?,
        None => {
            return Err(helpkit::Error::validation_invalid_argument(
                "name",
                "Provide a full name or --first",
                None,
                None,
            ))
        }
    };

    if let Some(full_name) = &args.rename {
        person.set_full_name(full_name)?;
    }

    Ok((person, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GlobalArgs;

    fn args(name: &[&str], first: Option<&str>, last: Option<&str>, rename: Option<&str>) -> PersonArgs {
        PersonArgs {
            name: name.iter().map(|s| s.to_string()).collect(),
            first: first.map(String::from),
            last: last.map(String::from),
            rename: rename.map(String::from),
        }
    }

    #[test]
    fn builds_from_positional_words() {
        let (person, _) = run(args(&["jane", "doe"], None, None, None), &GlobalArgs {}).unwrap();
        assert_eq!(person.full_name(), "Jane Doe");
    }

    #[test]
    fn explicit_parts_win_over_positional() {
        let (person, _) = run(
            args(&["ignored"], Some("ada"), Some("lovelace"), None),
            &GlobalArgs {},
        )
        .unwrap();
        assert_eq!(person.full_name(), "Ada Lovelace");
    }

    #[test]
    fn rename_splits_new_full_name() {
        let (person, _) = run(
            args(&["jane", "doe"], None, None, Some("mary ann smith")),
            &GlobalArgs {},
        )
        .unwrap();
        assert_eq!(person.first_name(), "Mary Ann");
        assert_eq!(person.last_name(), "Smith");
    }

    #[test]
    fn rename_to_single_word_clears_first_name() {
        let (person, _) = run(args(&["jane", "doe"], None, None, Some("smith")), &GlobalArgs {}).unwrap();
        assert_eq!(person.first_name(), "");
        assert_eq!(person.last_name(), "Smith");
    }

    #[test]
    fn missing_name_is_invalid_argument() {
        let err = run(args(&[], None, None, None), &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code, helpkit::ErrorCode::ValidationInvalidArgument);
    }
}
