//! Error types for quiz_normalizer
//!
//! Malformed quiz *data* is never an error here: it is reported through
//! [`Diagnostic`](crate::normalize::Diagnostic)s. These errors cover the
//! surrounding plumbing (JSON text, callers that want a `Result`).

use thiserror::Error;

use crate::normalize::Diagnostic;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, QuizError>;

/// Main error type for quiz_normalizer
#[derive(Error, Debug, Clone)]
pub enum QuizError {
    /// JSON text could not be parsed or produced
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The quiz failed normalization; every error diagnostic is kept
    #[error("Quiz rejected with {} error(s): {}", .errors.len(), summarize(.errors))]
    Rejected { errors: Vec<Diagnostic> },
}

fn summarize(errors: &[Diagnostic]) -> String {
    match errors.first() {
        Some(first) if errors.len() > 1 => format!("{first} (and {} more)", errors.len() - 1),
        Some(first) => first.to_string(),
        None => "no details".to_string(),
    }
}

impl QuizError {
    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a rejection error from collected diagnostics
    pub fn rejected(errors: Vec<Diagnostic>) -> Self {
        Self::Rejected { errors }
    }

    /// Diagnostics carried by a rejection, empty for other errors
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Rejected { errors } => errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DiagnosticCode;

    #[test]
    fn test_error_display() {
        let err = QuizError::serialization("expected value at line 1 column 1");
        assert!(err.to_string().contains("Serialization error"));
        assert!(err.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn test_rejected_display_summarizes_first_error() {
        let err = QuizError::rejected(vec![
            Diagnostic::new(DiagnosticCode::NotAnArray, "$.questions", "must be an array"),
            Diagnostic::new(
                DiagnosticCode::NoValidQuestions,
                "$.questions",
                "no valid questions",
            ),
        ]);
        let text = err.to_string();
        assert!(text.contains("2 error(s)"));
        assert!(text.contains("[not_an_array] $.questions: must be an array"));
        assert!(text.contains("and 1 more"));
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: QuizError = parse_err.into();
        assert!(matches!(err, QuizError::Serialization { .. }));
        assert!(err.diagnostics().is_empty());
    }
}
