use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

pub type CmdResult<T> = helpkit::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

// ============================================================================
// JSON Input Parsing (CLI layer)
// ============================================================================

/// Read JSON spec from string, file (@path), or stdin (-).
fn read_json_spec_to_string(spec: &str) -> helpkit::Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(helpkit::Error::validation_invalid_argument(
                "json",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
                None,
            ));
        }
        stdin.read_to_string(&mut buf).map_err(|e| {
            helpkit::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
        })?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(helpkit::Error::validation_invalid_argument(
                "json",
                "Invalid JSON spec '@' (missing file path)",
                None,
                None,
            ));
        }
        return std::fs::read_to_string(Path::new(path)).map_err(|e| {
            helpkit::Error::internal_io(e.to_string(), Some(format!("read {}", path)))
        });
    }

    Ok(spec.to_string())
}

/// Merge a JSON spec with flag values. Flags override spec values.
pub fn merge_json_sources(spec: Option<&str>, overrides: Map<String, Value>) -> helpkit::Result<Value> {
    let mut base = if let Some(spec) = spec {
        let raw = read_json_spec_to_string(spec)?;
        serde_json::from_str(&raw).map_err(|e| {
            helpkit::Error::validation_invalid_json(
                e,
                Some("parse JSON spec".to_string()),
                Some(raw.chars().take(200).collect::<String>()),
            )
        })?
    } else {
        Value::Object(Map::new())
    };

    match &mut base {
        Value::Object(base_obj) => {
            for (k, v) in overrides {
                base_obj.insert(k, v);
            }
        }
        _ => {
            return Err(helpkit::Error::validation_invalid_argument(
                "json",
                "JSON spec must be an object",
                None,
                None,
            ))
        }
    }

    Ok(base)
}

pub mod ask;
pub mod capitalize;
pub mod dedupe;
pub mod error;
pub mod person;
pub mod pluralize;
pub mod random;
pub mod sort;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (helpkit::Result<serde_json::Value>, i32) {
    match command {
        // Pure transforms
        crate::Commands::Capitalize(args) => dispatch!(args, capitalize),
        crate::Commands::Pluralize(args) => dispatch!(args, pluralize),
        crate::Commands::Sort(args) => dispatch!(args, sort),
        crate::Commands::Dedupe(args) => dispatch!(args, dedupe),
        crate::Commands::Error(args) => dispatch!(args, error),

        // Commands with global context
        crate::Commands::Random(args) => dispatch!(args, global, random),
        crate::Commands::Person(args) => dispatch!(args, global, person),
        crate::Commands::Ask(args) => dispatch!(args, global, ask),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn merge_flags_override_inline_spec() {
        let mut overrides = Map::new();
        overrides.insert("max".to_string(), json!(5));
        let merged = merge_json_sources(Some(r#"{"prompt":"Age?","max":99}"#), overrides).unwrap();
        assert_eq!(merged["prompt"], "Age?");
        assert_eq!(merged["max"], 5);
    }

    #[test]
    fn merge_without_spec_uses_flags_only() {
        let mut overrides = Map::new();
        overrides.insert("prompt".to_string(), json!("Name?"));
        let merged = merge_json_sources(None, overrides).unwrap();
        assert_eq!(merged, json!({"prompt": "Name?"}));
    }

    #[test]
    fn merge_reads_spec_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"prompt":"From file","answerType":"boolean"}}"#).unwrap();
        let spec = format!("@{}", file.path().display());

        let merged = merge_json_sources(Some(&spec), Map::new()).unwrap();
        assert_eq!(merged["prompt"], "From file");
        assert_eq!(merged["answerType"], "boolean");
    }

    #[test]
    fn merge_rejects_bad_json() {
        let err = merge_json_sources(Some("{not json"), Map::new()).unwrap_err();
        assert_eq!(err.code, helpkit::ErrorCode::ValidationInvalidJson);
    }

    #[test]
    fn merge_rejects_non_object_spec() {
        let err = merge_json_sources(Some("[1,2]"), Map::new()).unwrap_err();
        assert_eq!(err.code, helpkit::ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn at_without_path_is_invalid() {
        assert!(read_json_spec_to_string("@ ").is_err());
    }
}
