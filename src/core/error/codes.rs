use super::ErrorCode;

pub fn all_codes() -> &'static [ErrorCode] {
    &[
        ErrorCode::ConfigInvalidValue,
        ErrorCode::ValidationInvalidArgument,
        ErrorCode::ValidationInvalidJson,
        ErrorCode::ValidationAttemptsExhausted,
        ErrorCode::ValidationUnknownErrorCode,
        ErrorCode::InternalIoError,
        ErrorCode::InternalJsonError,
    ]
}

pub fn parse_code(code: &str) -> Option<ErrorCode> {
    all_codes()
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_code_round_trips_every_code() {
        for code in all_codes() {
            assert_eq!(parse_code(code.as_str()), Some(*code));
        }
    }

    #[test]
    fn parse_code_rejects_unknown() {
        assert_eq!(parse_code("project.not_found"), None);
    }
}
