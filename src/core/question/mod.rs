//! Interactive questions with validated answers.
//!
//! A [`Question`] reads raw text from an [`InputSource`], validates it against
//! its answer type, and on rejection tells the user why through a [`Notifier`]
//! before asking again. The loop only ends with a valid answer, unless a
//! retry bound was set with [`Question::with_max_attempts`].

mod terminal;
mod types;

pub use terminal::*;
pub use types::*;

use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static ANY_CHARACTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(".").unwrap());
static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)y|yes|true").unwrap());
static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)n|no|false").unwrap());

/// Source of raw answers. `Ok(None)` means the user cancelled the prompt.
pub trait InputSource {
    fn read(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Sink for validation failure messages.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Replays a fixed list of answers. Runs dry with an IO error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue a cancelled prompt.
    pub fn push_cancel(&mut self) {
        self.answers.push_back(None);
    }

    pub fn push_answer(&mut self, answer: impl Into<String>) {
        self.answers.push_back(Some(answer.into()));
    }

    /// Prompts shown so far, one per read.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            Error::internal_io(
                "No more scripted answers",
                Some(format!("answer '{}'", prompt)),
            )
        })
    }
}

/// A single failed validation. Handled inside [`Question::ask`]; the message
/// is what the notifier receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    message: String,
}

impl Rejection {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Rejection {}

/// A question and the rules its answer must satisfy.
///
/// For `String` answers `min`/`max` bound the length in characters and
/// `pattern` must match somewhere in the lower-cased, trimmed answer. For
/// `Number` answers they bound the value. `Boolean` ignores all three.
/// `min <= max` is not checked.
#[derive(Debug, Clone)]
pub struct Question {
    prompt: String,
    answer_type: AnswerType,
    pattern: Regex,
    min: i64,
    max: i64,
    max_attempts: Option<usize>,
}

impl Question {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer_type: AnswerType::String,
            pattern: ANY_CHARACTER.clone(),
            min: 0,
            max: i64::MAX,
            max_attempts: None,
        }
    }

    pub fn from_config(config: &QuestionConfig) -> Result<Self> {
        let mut question = Question::new(config.prompt.clone());

        if let Some(answer_type) = &config.answer_type {
            question = question.answer_type(answer_type.parse()?);
        }
        if let Some(pattern) = &config.pattern {
            question = question.pattern(pattern)?;
        }
        if let Some(min) = config.min {
            question.min = min;
        }
        if let Some(max) = config.max {
            question.max = max;
        }
        if let Some(attempts) = config.max_attempts {
            question = question.with_max_attempts(attempts);
        }

        Ok(question)
    }

    pub fn answer_type(mut self, answer_type: AnswerType) -> Self {
        self.answer_type = answer_type;
        self
    }

    /// Compile and set the pattern. A bad regex is `config.invalid_value`.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = Regex::new(pattern).map_err(|e| {
            Error::config_invalid_value("pattern", Some(pattern.to_string()), e.to_string())
        })?;
        Ok(self)
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Give up after `attempts` reads (cancellations count). Zero is treated
    /// as one. Without this, `ask` keeps asking forever.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn kind(&self) -> AnswerType {
        self.answer_type
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Ask until a valid answer arrives.
    ///
    /// Cancelled reads re-prompt without a notification. Errors from the
    /// input source propagate immediately.
    pub fn ask<I, N>(&self, input: &mut I, notifier: &mut N) -> Result<Answer>
    where
        I: InputSource + ?Sized,
        N: Notifier + ?Sized,
    {
        let mut attempts = 0usize;
        let mut last_rejection: Option<String> = None;

        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(Error::validation_attempts_exhausted(
                        self.prompt.clone(),
                        attempts,
                        last_rejection,
                    ));
                }
            }
            attempts += 1;

            let raw = match input.read(&self.prompt)? {
                Some(raw) => raw,
                None => continue,
            };

            match self.validate(&raw) {
                Ok(answer) => return Ok(answer),
                Err(rejection) => {
                    notifier.notify(rejection.message());
                    last_rejection = Some(rejection.message);
                }
            }
        }
    }

    /// Validate one raw answer without looping.
    pub fn validate(&self, raw: &str) -> std::result::Result<Answer, Rejection> {
        match self.answer_type {
            AnswerType::String => self.validate_text(raw),
            AnswerType::Number => self.validate_number(raw),
            AnswerType::Boolean => validate_bool(raw),
        }
    }

    fn validate_text(&self, raw: &str) -> std::result::Result<Answer, Rejection> {
        let answer = raw.to_lowercase().trim().to_string();
        if answer.is_empty() || !self.pattern.is_match(&answer) {
            return Err(Rejection::new("Need a valid answer"));
        }

        let length = i64::try_from(answer.chars().count()).unwrap_or(i64::MAX);
        if length < self.min {
            return Err(Rejection::new(format!(
                "Needs to be more than {} characters",
                self.min.saturating_sub(1)
            )));
        }
        if length > self.max {
            return Err(Rejection::new(format!(
                "Needs to be less than {} characters",
                self.max.saturating_add(1)
            )));
        }

        Ok(Answer::Text(answer))
    }

    fn validate_number(&self, raw: &str) -> std::result::Result<Answer, Rejection> {
        let number =
            parse_leading_integer(raw).ok_or_else(|| Rejection::new("Need to enter a number."))?;

        if number < self.min {
            return Err(Rejection::new(format!(
                "Needs to be more than {}",
                self.min.saturating_sub(1)
            )));
        }
        if number > self.max {
            return Err(Rejection::new(format!(
                "Needs to be less than {}",
                self.max.saturating_add(1)
            )));
        }

        Ok(Answer::Number(number))
    }
}

impl TryFrom<&QuestionConfig> for Question {
    type Error = Error;

    fn try_from(config: &QuestionConfig) -> Result<Self> {
        Question::from_config(config)
    }
}

/// Unanchored and case-insensitive, affirmative checked first: "yeah" is
/// true, "nope" is false, and "any" is true because it contains a `y`.
fn validate_bool(raw: &str) -> std::result::Result<Answer, Rejection> {
    if AFFIRMATIVE.is_match(raw) {
        Ok(Answer::Bool(true))
    } else if NEGATIVE.is_match(raw) {
        Ok(Answer::Bool(false))
    } else {
        Err(Rejection::new("Answer needs to be Yes or No."))
    }
}

/// Integer prefix of `raw`: optional leading whitespace and sign, then
/// digits. Trailing text is ignored (`"5abc"` is 5, `"3.7"` is 3). A `0x`
/// prefix switches to hexadecimal (`"0x1f"` is 31). Values past the `i64`
/// range saturate.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digit_count = body
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digit_count == 0 {
        return None;
    }

    let digits = &body[..digit_count];
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };

    Some(i64::from_str_radix(&signed, radix).unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
