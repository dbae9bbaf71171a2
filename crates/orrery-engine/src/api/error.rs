//! Engine error types.

/// Errors surfaced to the bridge. None of them stop the frame loop;
/// the bridge logs them and keeps the previous state.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// JSON handed over by the host could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A control edit named a key the game does not expose.
    #[error("unknown control `{0}`")]
    UnknownControl(String),

    /// A choice control was set to an option it does not list.
    #[error("control `{key}` has no option `{option}`")]
    InvalidOption { key: String, option: String },

    /// A control received a value of the wrong kind (e.g. a number for a choice).
    #[error("control `{key}` expects a {expected} value")]
    WrongValueKind { key: String, expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_control() {
        let err = EngineError::UnknownControl("zoom".into());
        assert_eq!(err.to_string(), "unknown control `zoom`");

        let err = EngineError::InvalidOption { key: "view".into(), option: "Moon".into() };
        assert_eq!(err.to_string(), "control `view` has no option `Moon`");
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Json(_)));
    }
}
