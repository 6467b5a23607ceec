//! Correct-answer resolution.
//!
//! Producers encode the correct answer in several ways: a 0-based index, a
//! 1-based index, a letter `A`-`D`, a numeric string, or the text of the
//! option itself. [`resolve_correct_answer`] maps all of them onto a 0-based
//! index, recording a warning whenever a conversion was needed.
//!
//! Rules, first match wins:
//!
//! | Raw value | Result | Warning |
//! |-----------|--------|---------|
//! | number in `0..=3` | as is | none |
//! | number in `1..=4` | `n - 1` | `answer_shifted` |
//! | `"A"`..`"D"` (any case) | `0..=3` | `answer_from_letter` |
//! | numeric string | same as numbers | as numbers |
//! | option text (any case) | its index | `answer_from_text` |

use serde_json::Value;

use super::diagnostics::{Diagnostics, JsonPath};
use super::error_code::DiagnosticCode;
use super::value::{js_trim, parse_finite};
use crate::types::OPTION_COUNT;

/// Resolve `raw` against the cleaned `options`.
///
/// Returns `None` when no rule applies; the caller turns that into an
/// `unresolved_answer` error. Non-integral numbers never resolve.
pub fn resolve_correct_answer(
    raw: Option<&Value>,
    options: &[String],
    path: &JsonPath,
    diagnostics: &mut Diagnostics,
) -> Option<usize> {
    match raw? {
        Value::Number(n) => resolve_numeric(n.as_f64()?, path, diagnostics),
        Value::String(s) => resolve_text(js_trim(s), options, path, diagnostics),
        _ => None,
    }
}

fn resolve_numeric(n: f64, path: &JsonPath, diagnostics: &mut Diagnostics) -> Option<usize> {
    let last = (OPTION_COUNT - 1) as f64;
    if !n.is_finite() {
        return None;
    }
    if (0.0..=last).contains(&n) {
        return as_index(n);
    }
    if (1.0..=OPTION_COUNT as f64).contains(&n) {
        let index = as_index(n - 1.0)?;
        diagnostics.warning(
            DiagnosticCode::AnswerShifted,
            path,
            "correctAnswer converted from 1..4 to 0..3",
        );
        return Some(index);
    }
    None
}

fn resolve_text(
    text: &str,
    options: &[String],
    path: &JsonPath,
    diagnostics: &mut Diagnostics,
) -> Option<usize> {
    if text.is_empty() {
        return None;
    }

    if let Some(index) = letter_index(text) {
        diagnostics.warning(
            DiagnosticCode::AnswerFromLetter,
            path,
            "correctAnswer converted from letter A-D to index 0..3",
        );
        return Some(index);
    }

    // A numeric string never falls through to text matching, even when it
    // is out of range.
    if let Some(n) = parse_finite(text) {
        return resolve_numeric(n, path, diagnostics);
    }

    let needle = text.to_lowercase();
    let index = options
        .iter()
        .position(|option| option.to_lowercase() == needle)?;
    diagnostics.warning(
        DiagnosticCode::AnswerFromText,
        path,
        "correctAnswer converted from option text",
    );
    Some(index)
}

fn letter_index(text: &str) -> Option<usize> {
    match text.to_ascii_uppercase().as_str() {
        "A" => Some(0),
        "B" => Some(1),
        "C" => Some(2),
        "D" => Some(3),
        _ => None,
    }
}

fn as_index(n: f64) -> Option<usize> {
    (n.fract() == 0.0).then_some(n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> Vec<String> {
        ["Lyon", "Marseille", "Paris", "Nice"].map(String::from).to_vec()
    }

    fn resolve(raw: Value) -> (Option<usize>, Diagnostics) {
        let mut diags = Diagnostics::new();
        let path = JsonPath::root().field("questions").index(0).field("correctAnswer");
        let index = resolve_correct_answer(Some(&raw), &options(), &path, &mut diags);
        (index, diags)
    }

    #[test]
    fn test_zero_based_index_is_used_directly() {
        for n in 0..=3 {
            let (index, diags) = resolve(json!(n));
            assert_eq!(index, Some(n));
            assert!(diags.is_empty());
        }
    }

    #[test]
    fn test_four_is_shifted() {
        let (index, diags) = resolve(json!(4));
        assert_eq!(index, Some(3));
        assert_eq!(diags.warnings.len(), 1);
        assert_eq!(diags.warnings[0].code, DiagnosticCode::AnswerShifted);
        assert!(diags.warnings[0].message.contains("1..4"));
        assert_eq!(diags.warnings[0].path, "$.questions[0].correctAnswer");
    }

    #[test]
    fn test_out_of_range_numbers_fail() {
        for raw in [json!(-1), json!(5), json!(1.5), json!(3.5)] {
            let (index, diags) = resolve(raw.clone());
            assert_eq!(index, None, "{raw}");
            assert!(diags.is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        for (raw, expected) in [("A", 0), ("b", 1), (" C ", 2), ("d", 3)] {
            let (index, diags) = resolve(json!(raw));
            assert_eq!(index, Some(expected));
            assert_eq!(diags.warnings[0].code, DiagnosticCode::AnswerFromLetter);
        }
    }

    #[test]
    fn test_numeric_strings() {
        let (index, diags) = resolve(json!(" 2 "));
        assert_eq!(index, Some(2));
        assert!(diags.is_empty());

        let (index, diags) = resolve(json!("4"));
        assert_eq!(index, Some(3));
        assert_eq!(diags.warnings[0].code, DiagnosticCode::AnswerShifted);

        let (index, _) = resolve(json!("7"));
        assert_eq!(index, None);
    }

    #[test]
    fn test_option_text_match() {
        let (index, diags) = resolve(json!("  paris "));
        assert_eq!(index, Some(2));
        assert_eq!(diags.warnings.len(), 1);
        assert_eq!(diags.warnings[0].code, DiagnosticCode::AnswerFromText);
    }

    #[test]
    fn test_unresolvable_values() {
        for raw in [json!(""), json!("   "), json!("Berlin"), json!(true), json!([1]), json!({})] {
            let (index, _) = resolve(raw.clone());
            assert_eq!(index, None, "{raw}");
        }

        let mut diags = Diagnostics::new();
        let path = JsonPath::root();
        assert_eq!(resolve_correct_answer(None, &options(), &path, &mut diags), None);
    }
}
