//! Typed error kinds for configuration interpretation.
//!
//! Every error here is raised synchronously at the point of detection. There is
//! no retry or recovery: a failure at this boundary stops the pipeline before
//! extraction or resolution begins.

use std::fmt;

use thiserror::Error;

/// A single structural violation found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON-pointer-style path to the offending value; empty for the root.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "document {}", self.message)
        } else {
            write!(f, "{} {}", self.path, self.message)
        }
    }
}

/// Aggregated diagnostic from schema validation.
///
/// Carries every violation found in one pass, not just the first, so a user can
/// fix their whole config file in one round.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid config: {}", summarize(.violations))]
pub struct ConfigValidationError {
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A `plural-forms` header that does not carry the expected shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PluralFormsError {
    #[error("headers have no plural-forms entry")]
    MissingHeader,
    #[error("plural-forms header {0:?} has no nplurals=N clause")]
    MissingNPlurals(String),
    #[error("plural-forms header {0:?} has no plural=(...); clause")]
    MissingExpression(String),
}

/// Errors surfaced by the configuration interpreter.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document failed structural validation; construction is aborted.
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// The validated document could not be deserialized into the typed model.
    #[error("config document could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// No alias maps to the requested canonical function name. Carries the
    /// rendered alias table so the message shows what was available.
    #[error("alias for function {function:?} was not found in {table}")]
    AliasNotFound { function: String, table: String },

    /// The active plural-forms header is malformed.
    #[error(transparent)]
    PluralForms(#[from] PluralFormsError),
}

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn test_violation_display() {
        let root = Violation::new("", "must be an object");
        assert_eq!(root.to_string(), "document must be an object");

        let nested = Violation::new("/extract/output", "must be a string");
        assert_eq!(nested.to_string(), "/extract/output must be a string");
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ConfigValidationError {
            violations: vec![
                Violation::new("", "must not have additional property \"outputs\""),
                Violation::new("/resolve", "must have required property \"locale\""),
            ],
        };
        let text = err.to_string();
        assert!(text.contains("outputs"));
        assert!(text.contains("/resolve must have required property"));
    }

    #[test]
    fn test_alias_not_found_message_carries_table() {
        let err = ConfigError::AliasNotFound {
            function: "dngettext".to_string(),
            table: "{\"gt\": \"gettext\"}".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("dngettext"));
        assert!(text.contains("\"gt\": \"gettext\""));
    }
}
