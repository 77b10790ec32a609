use clap::Args;
use serde::Serialize;
use serde_json::{json, Map, Value};

use helpkit::question::{InputSource, ScriptedInput, StderrNotifier, TerminalPrompt};
use helpkit::{log_status, Answer, AnswerType, Question, QuestionConfig};

use super::{merge_json_sources, CmdResult};

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct AskArgs {
    /// Text shown when asking (overrides "prompt" in --json)
    pub prompt: Option<String>,

    /// Answer type: string, number or boolean
    #[arg(long = "type", value_name = "TYPE")]
    pub answer_type: Option<String>,

    /// Regex a string answer must match
    #[arg(long)]
    pub pattern: Option<String>,

    /// Minimum value (number) or length (string)
    #[arg(long)]
    pub min: Option<i64>,

    /// Maximum value (number) or length (string)
    #[arg(long)]
    pub max: Option<i64>,

    /// Give up after this many attempts instead of asking forever
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// JSON question spec (inline, @file, or - for stdin)
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,

    /// Answer non-interactively; repeat to supply retries in order
    #[arg(long = "answer", value_name = "TEXT")]
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskOutput {
    pub prompt: String,
    pub answer_type: AnswerType,
    pub answer: Answer,
}

/// Build the question config from --json and flags. Flags win.
pub fn question_config(args: &AskArgs) -> helpkit::Result<QuestionConfig> {
    let mut overrides = Map::new();
    if let Some(prompt) = &args.prompt {
        overrides.insert("prompt".to_string(), json!(prompt));
    }
    if let Some(answer_type) = &args.answer_type {
        overrides.insert("answerType".to_string(), json!(answer_type));
    }
    if let Some(pattern) = &args.pattern {
        overrides.insert("pattern".to_string(), json!(pattern));
    }
    if let Some(min) = args.min {
        overrides.insert("min".to_string(), json!(min));
    }
    if let Some(max) = args.max {
        overrides.insert("max".to_string(), json!(max));
    }
    if let Some(attempts) = args.max_attempts {
        overrides.insert("maxAttempts".to_string(), json!(attempts));
    }

    let merged: Value = merge_json_sources(args.json.as_deref(), overrides)?;
    let raw = merged.to_string();
    serde_json::from_value(merged).map_err(|e| {
        helpkit::Error::validation_invalid_json(e, Some("parse question spec".to_string()), Some(raw))
    })
}

pub fn run(args: AskArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<AskOutput> {
    let config = question_config(&args)?;
    helpkit::validation::require_non_empty(&config.prompt, "prompt", "Question prompt cannot be empty")?;
    let question = Question::from_config(&config)?;

    let mut input: Box<dyn InputSource> = if args.answers.is_empty() {
        if !crate::tty::is_stdin_tty() {
            log_status!("ask", "Reading answers from piped stdin");
        }
        Box::new(TerminalPrompt::new())
    } else {
        Box::new(ScriptedInput::new(args.answers))
    };

    let answer = question.ask(input.as_mut(), &mut StderrNotifier)?;

    Ok((
        AskOutput {
            prompt: question.prompt().to_string(),
            answer_type: question.kind(),
            answer,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GlobalArgs;

    fn base_args() -> AskArgs {
        AskArgs {
            prompt: None,
            answer_type: None,
            pattern: None,
            min: None,
            max: None,
            max_attempts: None,
            json: None,
            answers: Vec::new(),
        }
    }

    #[test]
    fn flags_override_json_spec() {
        let args = AskArgs {
            json: Some(r#"{"prompt":"Age?","answerType":"number","max":99}"#.to_string()),
            max: Some(10),
            ..base_args()
        };
        let config = question_config(&args).unwrap();
        assert_eq!(config.prompt, "Age?");
        assert_eq!(config.answer_type.as_deref(), Some("number"));
        assert_eq!(config.max, Some(10));
    }

    #[test]
    fn scripted_answers_retry_until_valid() {
        let args = AskArgs {
            prompt: Some("Pick 1-10".to_string()),
            answer_type: Some("number".to_string()),
            min: Some(1),
            max: Some(10),
            answers: vec!["0".into(), "11".into(), "abc".into(), "5".into()],
            ..base_args()
        };
        let (out, code) = run(args, &GlobalArgs {}).unwrap();
        assert_eq!(out.answer, Answer::Number(5));
        assert_eq!(code, 0);
    }

    #[test]
    fn unknown_type_is_invalid_configuration() {
        let args = AskArgs {
            prompt: Some("When?".to_string()),
            answer_type: Some("date".to_string()),
            answers: vec!["today".into()],
            ..base_args()
        };
        let err = run(args, &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code, helpkit::ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn missing_prompt_is_invalid_argument() {
        let args = AskArgs {
            answers: vec!["x".into()],
            ..base_args()
        };
        let err = run(args, &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code, helpkit::ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn max_attempts_stops_the_loop() {
        let args = AskArgs {
            prompt: Some("Ready?".to_string()),
            answer_type: Some("boolean".to_string()),
            max_attempts: Some(2),
            answers: vec!["perhaps".into(), "later".into(), "yes".into()],
            ..base_args()
        };
        let err = run(args, &GlobalArgs {}).unwrap_err();
        assert_eq!(err.code, helpkit::ErrorCode::ValidationAttemptsExhausted);
    }
}
