use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Result;
use crate::text::capitalize;
use crate::utils::validation;

/// A person's first and last name, both capitalized on assignment.
///
/// The first name is non-empty at construction; only `set_full_name` with a
/// single token can clear it. `full_name` is derived on every read as
/// `first + " " + last`, so a person without a last name renders with a
/// trailing space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    /// Build from explicit parts. Fails when `first` is blank.
    pub fn new(first: &str, last: &str) -> Result<Self> {
        let first = validation::require_non_empty(first, "first_name", "First name cannot be empty")?;
        Ok(Self {
            first_name: capitalize(first),
            last_name: capitalize(last.trim()),
        })
    }

    /// Build from a single full-name string.
    ///
    /// The last whitespace-separated token is the last name and the rest form
    /// the first name. A single token is taken as the first name.
    pub fn parse(full_name: &str) -> Result<Self> {
        let tokens = split_tokens(full_name)?;
        if tokens.len() == 1 {
            return Self::new(tokens[0], "");
        }

        let mut name = Self {
            first_name: String::new(),
            last_name: String::new(),
        };
        name.assign_tokens(&tokens);
        Ok(name)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace both parts by splitting `full_name` on whitespace.
    ///
    /// Every token is capitalized; `"mary ann smith"` gives first name
    /// `"Mary Ann"` and last name `"Smith"`. A single token becomes the last
    /// name and clears the first name, so `"smith"` renders as `" Smith"`.
    pub fn set_full_name(&mut self, full_name: &str) -> Result<()> {
        let tokens = split_tokens(full_name)?;
        self.assign_tokens(&tokens);
        Ok(())
    }

    pub fn set_first_name(&mut self, first: &str) -> Result<()> {
        let first = validation::require_non_empty(first, "first_name", "First name cannot be empty")?;
        self.first_name = capitalize(first);
        Ok(())
    }

    pub fn set_last_name(&mut self, last: &str) {
        self.last_name = capitalize(last.trim());
    }

    // Last token is the last name; whatever precedes it, possibly nothing, is the first name.
    fn assign_tokens(&mut self, tokens: &[&str]) {
        let (last, rest) = match tokens.split_last() {
            Some(split) => split,
            None => return,
        };
        self.last_name = capitalize(last);
        self.first_name = rest
            .iter()
            .map(|token| capitalize(token))
            .collect::<Vec<_>>()
            .join(" ");
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Serialize for PersonName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PersonName", 3)?;
        state.serialize_field("firstName", &self.first_name)?;
        state.serialize_field("lastName", &self.last_name)?;
        state.serialize_field("fullName", &self.full_name())?;
        state.end()
    }
}

fn split_tokens(full_name: &str) -> Result<Vec<&str>> {
    let trimmed = validation::require_non_empty(full_name, "full_name", "Full name cannot be empty")?;
    Ok(trimmed.split_whitespace().collect())
}
