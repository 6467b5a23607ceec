//! Core types for quiz normalization
//!
//! The canonical quiz shape handed to downstream consumers, and the options
//! that tune a normalization run.

use serde::{Deserialize, Serialize};
use serde_json::Value;


/// Number of answer options every normalized question carries.
pub const OPTION_COUNT: usize = 4;

/// Title substituted when the raw payload has none.
pub const FALLBACK_TITLE: &str = "Quiz";

/// A quiz in canonical form.
///
/// `title` is never empty and `questions` is never empty; both are
/// guaranteed by [`validate_and_normalize_quiz`](crate::validate_and_normalize_quiz).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuiz {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<NormalizedQuestion>,
}

/// A single multiple-choice question in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuestion {
    /// Prompt text (non-empty, trimmed)
    pub question: String,
    /// Exactly four non-empty, trimmed options
    pub options: [String; OPTION_COUNT],
    /// Index into `options`, always in `0..OPTION_COUNT`
    pub correct_answer: usize,
    /// Optional explanation, empty when absent
    #[serde(default)]
    pub explanation: String,
}

impl NormalizedQuestion {
    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }
}

/// Options for a normalization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Number of questions the caller asked for. A mismatch with the number
    /// of normalized questions is reported as a warning. `None` disables the
    /// check.
    #[serde(default)]
    pub expected_question_count: Option<usize>,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected question count
    pub fn with_expected_question_count(mut self, count: usize) -> Self {
        self.expected_question_count = Some(count);
        self
    }

    /// Read options from a loosely-typed JSON value.
    ///
    /// `expectedQuestionCount` (or `expected_question_count`) enables the
    /// count check when it is a non-negative integer. Anything else (missing,
    /// null, strings, negative or fractional numbers, a non-object value)
    /// leaves the check disabled.
    pub fn from_json_value(value: &Value) -> Self {
        let expected_question_count = value
            .get("expectedQuestionCount")
            .or_else(|| value.get("expected_question_count"))
            .and_then(|v| match v {
                Value::Number(n) => Some(n),
                _ => None,
            })
            .and_then(as_count);

        Self {
            expected_question_count,
        }
    }
}

fn as_count(n: &serde_json::Number) -> Option<usize> {
    if let Some(count) = n.as_u64() {
        return usize::try_from(count).ok();
    }
    n.as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= usize::MAX as f64)
        .map(|f| f as usize)
}
