use super::{codes, ErrorCode, Hint};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelpSummary {
    pub code: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelp {
    pub code: String,
    pub summary: String,
    pub details_schema: serde_json::Value,
    pub hints: Vec<Hint>,
}

pub fn list() -> Vec<ErrorHelpSummary> {
    codes::all_codes()
        .iter()
        .copied()
        .map(|code| {
            let help = explain(code);
            ErrorHelpSummary {
                code: help.code,
                summary: help.summary,
            }
        })
        .collect()
}

fn help(code: ErrorCode, summary: &str, details_schema: serde_json::Value, hint: &str) -> ErrorHelp {
    ErrorHelp {
        code: code.as_str().to_string(),
        summary: summary.to_string(),
        details_schema,
        hints: vec![Hint {
            message: hint.to_string(),
        }],
    }
}

pub fn explain(code: ErrorCode) -> ErrorHelp {
    match code {
        ErrorCode::ConfigInvalidValue => help(
            code,
            "Question configuration is invalid",
            serde_json::json!({"key":"string","value":"string?","problem":"string"}),
            "Use answerType string, number or boolean and a pattern that compiles as a regex",
        ),
        ErrorCode::ValidationInvalidArgument => help(
            code,
            "Invalid argument",
            serde_json::json!({"field":"string","problem":"string","id":"string?","tried":"string[]?"}),
            "Verify the argument value and try again",
        ),
        ErrorCode::ValidationInvalidJson => help(
            code,
            "Invalid JSON input",
            serde_json::json!({"error":"string","context":"string?","input":"string?"}),
            "Validate the JSON question spec you passed with --json",
        ),
        ErrorCode::ValidationAttemptsExhausted => help(
            code,
            "No valid answer within the allowed number of attempts",
            serde_json::json!({"prompt":"string","attempts":"number","lastRejection":"string?"}),
            "Raise --max-attempts or omit it to keep asking until a valid answer arrives",
        ),
        ErrorCode::ValidationUnknownErrorCode => help(
            code,
            "Unknown error code",
            serde_json::json!({"code":"string"}),
            "Run `helpkit error codes` to list available codes",
        ),
        ErrorCode::InternalIoError => help(
            code,
            "Internal IO error",
            serde_json::json!({"error":"string","context":"string?"}),
            "Check that stdin is open when answering questions",
        ),
        ErrorCode::InternalJsonError => help(
            code,
            "Internal JSON error",
            serde_json::json!({"error":"string","context":"string?"}),
            "Report as a helpkit bug if persistent",
        ),
    }
}
