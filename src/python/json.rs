//! JSON interface for Python callers
//!
//! Payloads cross the boundary as JSON text, so the Python side never needs
//! to mirror the Rust types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde_json::Value;

use crate::errors::QuizError;
use crate::normalize::{normalize_batch, normalize_document_json, normalize_json};
use crate::types::NormalizeOptions;

fn to_py_err(err: QuizError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Negative counts raise `ValueError` instead of pyo3's `OverflowError`.
fn options(expected_question_count: Option<i64>) -> PyResult<NormalizeOptions> {
    let expected_question_count = expected_question_count
        .map(|count| {
            usize::try_from(count).map_err(|_| {
                PyValueError::new_err(format!(
                    "expected_question_count must be non-negative (got: {count})"
                ))
            })
        })
        .transpose()?;
    Ok(NormalizeOptions {
        expected_question_count,
    })
}

/// Normalize one JSON-encoded quiz and return the JSON-encoded outcome.
#[pyfunction]
#[pyo3(signature = (json_input, expected_question_count=None))]
pub fn validate_and_normalize_quiz(
    json_input: &str,
    expected_question_count: Option<i64>,
) -> PyResult<String> {
    let outcome = normalize_json(json_input, &options(expected_question_count)?).map_err(to_py_err)?;
    serde_json::to_string(&outcome).map_err(|e| to_py_err(e.into()))
}

/// Normalize a JSON array of quizzes in parallel.
///
/// Returns a JSON array of outcomes in input order. The GIL is released
/// while the batch runs.
#[pyfunction]
#[pyo3(signature = (json_input, expected_question_count=None))]
pub fn normalize_batch_json(
    py: Python<'_>,
    json_input: &str,
    expected_question_count: Option<i64>,
) -> PyResult<String> {
    let opts = options(expected_question_count)?;
    let raws: Vec<Value> = serde_json::from_str(json_input)
        .map_err(|e| PyValueError::new_err(format!("Invalid JSON: {e}")))?;
    let outcomes = py.allow_threads(|| normalize_batch(&raws, &opts));
    serde_json::to_string(&outcomes).map_err(|e| to_py_err(e.into()))
}

/// Normalize a JSON document of the form `{"quiz": ..., "options": ...}`.
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn normalize_document(json_input: &str) -> PyResult<String> {
    let outcome = normalize_document_json(json_input).map_err(to_py_err)?;
    serde_json::to_string(&outcome).map_err(|e| to_py_err(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_accept_non_negative_counts() {
        assert_eq!(options(Some(5)).unwrap().expected_question_count, Some(5));
        assert_eq!(options(None).unwrap().expected_question_count, None);
    }

    #[test]
    fn test_options_reject_negative_counts() {
        assert!(options(Some(-1)).is_err());
        assert!(options(Some(i64::MIN)).is_err());
    }
}
