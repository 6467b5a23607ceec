//! Normalization of a single question entry.

use serde_json::Value;

use super::answer::resolve_correct_answer;
use super::diagnostics::{Diagnostics, JsonPath};
use super::error_code::DiagnosticCode;
use super::value::{clean_text, first_present, first_truthy};
use crate::types::{NormalizedQuestion, OPTION_COUNT};

pub(crate) const QUESTION_ALIASES: &[&str] = &["question", "prompt", "text", "enonce"];
pub(crate) const OPTIONS_ALIASES: &[&str] = &["options", "choices", "answers", "reponses"];
pub(crate) const ANSWER_ALIASES: &[&str] = &["correctAnswer", "correct_answer", "answer", "correct"];
pub(crate) const EXPLANATION_ALIASES: &[&str] = &["explanation", "explication", "explain"];

/// Normalize the entry at `path`.
///
/// Checks run in a fixed order (shape, question text, options array,
/// option count, correct answer) and stop at the first failure, which is
/// recorded as exactly one error. Conversion warnings are recorded along
/// the way.
pub fn normalize_question(
    entry: &Value,
    path: &JsonPath,
    diagnostics: &mut Diagnostics,
) -> Option<NormalizedQuestion> {
    let Value::Object(map) = entry else {
        diagnostics.error(DiagnosticCode::NotAnObject, path, "entry must be an object");
        return None;
    };

    let question = clean_text(first_truthy(map, QUESTION_ALIASES));
    if question.is_empty() {
        diagnostics.error(
            DiagnosticCode::MissingQuestionText,
            path.field("question"),
            "question text is required",
        );
        return None;
    }

    let options_path = path.field("options");
    let Some(Value::Array(raw_options)) = first_truthy(map, OPTIONS_ALIASES) else {
        diagnostics.error(
            DiagnosticCode::OptionsNotArray,
            &options_path,
            format!("options must be an array of {OPTION_COUNT} elements"),
        );
        return None;
    };

    let cleaned: Vec<String> = raw_options
        .iter()
        .map(|option| clean_text(Some(option)))
        .filter(|option| !option.is_empty())
        .collect();
    let options: [String; OPTION_COUNT] = match cleaned.try_into() {
        Ok(options) => options,
        Err(cleaned) => {
            diagnostics.error(
                DiagnosticCode::OptionCount,
                &options_path,
                format!(
                    "options must contain exactly {OPTION_COUNT} elements (got: {})",
                    cleaned.len()
                ),
            );
            return None;
        }
    };

    let answer_path = path.field("correctAnswer");
    let Some(correct_answer) = resolve_correct_answer(
        first_present(map, ANSWER_ALIASES),
        &options,
        &answer_path,
        diagnostics,
    ) else {
        diagnostics.error(
            DiagnosticCode::UnresolvedAnswer,
            &answer_path,
            "correctAnswer must be an index 0..3 (or convertible)",
        );
        return None;
    };

    let explanation = clean_text(first_truthy(map, EXPLANATION_ALIASES));

    Some(NormalizedQuestion {
        question,
        options,
        correct_answer,
        explanation,
    })
}
