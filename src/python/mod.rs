//! Python bindings via PyO3
//!
//! This module provides the Python interface for quiz_normalizer.

pub mod json;

use pyo3::prelude::*;

/// Register all Python functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("FALLBACK_TITLE", crate::types::FALLBACK_TITLE)?;

    m.add_function(wrap_pyfunction!(json::validate_and_normalize_quiz, m)?)?;
    m.add_function(wrap_pyfunction!(json::normalize_batch_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::normalize_document, m)?)?;

    Ok(())
}
