//! Stable codes attached to every normalization diagnostic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable classification of a [`Diagnostic`](super::Diagnostic).
///
/// The snake_case form is used both in JSON and in `Display` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    // ─── Errors ─────────────────────────────────────────────────────────
    /// The value at this path must be a JSON object.
    NotAnObject,
    /// The questions container is not an array.
    NotAnArray,
    /// A question has no prompt text.
    MissingQuestionText,
    /// A question's options field is not an array.
    OptionsNotArray,
    /// A question does not have exactly four non-empty options.
    OptionCount,
    /// The correct answer could not be mapped to an option index.
    UnresolvedAnswer,
    /// No question survived normalization.
    NoValidQuestions,

    // ─── Warnings ───────────────────────────────────────────────────────
    /// A 1..4 answer index was shifted to 0..3.
    AnswerShifted,
    /// A letter A-D was mapped to an index.
    AnswerFromLetter,
    /// Option text was mapped to its index.
    AnswerFromText,
    /// The title was missing and the fallback was used.
    TitleFallback,
    /// The normalized question count differs from the expected count.
    QuestionCountMismatch,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::NotAnArray => "not_an_array",
            Self::MissingQuestionText => "missing_question_text",
            Self::OptionsNotArray => "options_not_array",
            Self::OptionCount => "option_count",
            Self::UnresolvedAnswer => "unresolved_answer",
            Self::NoValidQuestions => "no_valid_questions",
            Self::AnswerShifted => "answer_shifted",
            Self::AnswerFromLetter => "answer_from_letter",
            Self::AnswerFromText => "answer_from_text",
            Self::TitleFallback => "title_fallback",
            Self::QuestionCountMismatch => "question_count_mismatch",
        }
    }

    /// Whether diagnostics with this code block normalization.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::NotAnObject
                | Self::NotAnArray
                | Self::MissingQuestionText
                | Self::OptionsNotArray
                | Self::OptionCount
                | Self::UnresolvedAnswer
                | Self::NoValidQuestions
        )
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
