//! Quiz-level normalization: the public entry point.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::Value;

use super::diagnostics::{Diagnostic, Diagnostics, JsonPath};
use super::error_code::DiagnosticCode;
use super::question::normalize_question;
use super::value::{clean_title, first_truthy};
use crate::errors::{QuizError, Result};
use crate::types::{NormalizeOptions, NormalizedQuiz, FALLBACK_TITLE};

pub(crate) const TITLE_ALIASES: &[&str] = &["title", "titre", "name"];
pub(crate) const DESCRIPTION_ALIASES: &[&str] = &["description", "desc", "summary"];
pub(crate) const QUESTIONS_ALIASES: &[&str] = &["questions", "items", "quiz"];

// ─── Outcome ────────────────────────────────────────────────────────────────

/// Result of a normalization run.
///
/// Warnings are carried by both variants. Serializes to
/// `{"ok": true, "quiz": ..., "warnings": [...]}` or
/// `{"ok": false, "errors": [...], "warnings": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Valid {
        quiz: NormalizedQuiz,
        warnings: Vec<Diagnostic>,
    },
    Invalid {
        errors: Vec<Diagnostic>,
        warnings: Vec<Diagnostic>,
    },
}

impl NormalizeOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The normalized quiz, if normalization succeeded.
    pub fn quiz(&self) -> Option<&NormalizedQuiz> {
        match self {
            Self::Valid { quiz, .. } => Some(quiz),
            Self::Invalid { .. } => None,
        }
    }

    /// Blocking errors; empty on success.
    pub fn errors(&self) -> &[Diagnostic] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { errors, .. } => errors,
        }
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        match self {
            Self::Valid { warnings, .. } | Self::Invalid { warnings, .. } => warnings,
        }
    }

    /// Convert into a plain `Result`, keeping warnings on success.
    pub fn into_result(self) -> Result<(NormalizedQuiz, Vec<Diagnostic>)> {
        match self {
            Self::Valid { quiz, warnings } => Ok((quiz, warnings)),
            Self::Invalid { errors, .. } => Err(QuizError::rejected(errors)),
        }
    }
}

impl Serialize for NormalizeOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NormalizeOutcome", 3)?;
        match self {
            Self::Valid { quiz, warnings } => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("quiz", quiz)?;
                state.serialize_field("warnings", warnings)?;
            }
            Self::Invalid { errors, warnings } => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("errors", errors)?;
                state.serialize_field("warnings", warnings)?;
            }
        }
        state.end()
    }
}

// ─── Entry points ───────────────────────────────────────────────────────────

/// Validate an untrusted quiz payload and normalize it into canonical form.
///
/// Never panics and never fails for malformed data: every problem becomes a
/// [`Diagnostic`]. Per-question problems drop that question and processing
/// continues, so all errors are reported together. A top-level value that is
/// not an object is rejected with a single error at `$`.
///
/// # Example
///
/// ```rust
/// use quiz_normalizer::{validate_and_normalize_quiz, NormalizeOptions};
/// use serde_json::json;
///
/// let raw = json!({
///     "titre": "Capitales",
///     "questions": [{
///         "question": "Capitale de la France ?",
///         "options": ["Lyon", "Marseille", "Paris", "Nice"],
///         "correctAnswer": "C"
///     }]
/// });
/// let outcome = validate_and_normalize_quiz(&raw, &NormalizeOptions::default());
/// let quiz = outcome.quiz().unwrap();
/// assert_eq!(quiz.title, "Capitales");
/// assert_eq!(quiz.questions[0].correct_answer, 2);
/// assert_eq!(outcome.warnings().len(), 1);
/// ```
pub fn validate_and_normalize_quiz(raw: &Value, options: &NormalizeOptions) -> NormalizeOutcome {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("quiz_normalize").entered();

    let root = JsonPath::root();
    let mut diagnostics = Diagnostics::new();

    let Value::Object(map) = raw else {
        diagnostics.error(DiagnosticCode::NotAnObject, &root, "quiz must be an object");
        return finish(diagnostics, None);
    };

    let title = clean_title(first_truthy(map, TITLE_ALIASES));
    let description = clean_title(first_truthy(map, DESCRIPTION_ALIASES));

    let questions_path = root.field("questions");
    let entries: &[Value] = match first_truthy(map, QUESTIONS_ALIASES) {
        Some(Value::Array(entries)) => entries.as_slice(),
        _ => {
            diagnostics.error(
                DiagnosticCode::NotAnArray,
                &questions_path,
                "questions must be an array",
            );
            &[]
        }
    };

    let questions: Vec<_> = entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let question = normalize_question(entry, &questions_path.index(i), &mut diagnostics);
            if question.is_none() {
                trace_event!(trace, index = i, "question rejected");
            }
            question
        })
        .collect();

    if title.is_empty() {
        diagnostics.warning(
            DiagnosticCode::TitleFallback,
            root.field("title"),
            format!("title missing -> fallback '{FALLBACK_TITLE}'"),
        );
    }

    if questions.is_empty() {
        diagnostics.error(
            DiagnosticCode::NoValidQuestions,
            &questions_path,
            "no valid questions",
        );
    }

    if let Some(expected) = options.expected_question_count {
        if expected != questions.len() {
            diagnostics.warning(
                DiagnosticCode::QuestionCountMismatch,
                &questions_path,
                format!("expected {expected} questions, got {}", questions.len()),
            );
        }
    }

    let quiz = NormalizedQuiz {
        title: if title.is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            title
        },
        description,
        questions,
    };
    finish(diagnostics, Some(quiz))
}

/// Parse `text` as JSON, then normalize it.
///
/// Fails only when `text` is not valid JSON; data problems are reported in
/// the outcome.
pub fn normalize_json(text: &str, options: &NormalizeOptions) -> Result<NormalizeOutcome> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(validate_and_normalize_quiz(&raw, options))
}

/// A quiz payload bundled with its normalizer options.
///
/// ```json
/// { "quiz": { "title": "...", "questions": [] }, "options": { "expectedQuestionCount": 5 } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizDocument {
    /// Raw, untrusted quiz payload.
    #[serde(default)]
    pub quiz: Value,
    /// Loosely-typed options, read with [`NormalizeOptions::from_json_value`].
    #[serde(default)]
    pub options: Value,
}

/// Parse a [`QuizDocument`] from JSON text and normalize its quiz with the
/// options it carries.
///
/// Fails only when `text` is not a JSON object; unusable option values
/// disable the checks they control.
pub fn normalize_document_json(text: &str) -> Result<NormalizeOutcome> {
    let doc: QuizDocument = serde_json::from_str(text)?;
    let options = NormalizeOptions::from_json_value(&doc.options);
    Ok(validate_and_normalize_quiz(&doc.quiz, &options))
}

fn finish(diagnostics: Diagnostics, quiz: Option<NormalizedQuiz>) -> NormalizeOutcome {
    trace_event!(
        debug,
        questions = quiz.as_ref().map_or(0, |q| q.questions.len()),
        errors = diagnostics.errors.len(),
        warnings = diagnostics.warnings.len(),
        "quiz normalized"
    );

    let has_errors = diagnostics.has_errors();
    let Diagnostics { errors, warnings } = diagnostics;
    match quiz {
        Some(quiz) if !has_errors => NormalizeOutcome::Valid { quiz, warnings },
        _ => NormalizeOutcome::Invalid { errors, warnings },
    }
}
