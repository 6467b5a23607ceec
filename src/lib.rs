//! # quiz_normalizer
//!
//! Validation and normalization of loosely-structured quiz payloads.
//!
//! Quiz payloads produced by a generation step or typed into a form rarely
//! match the canonical shape exactly: field names vary (`title`/`titre`,
//! `options`/`reponses`), the correct answer may be a 0-based index, a
//! 1-based index, a letter or the option text itself. This library turns
//! any JSON value into either a canonical [`NormalizedQuiz`] plus warnings,
//! or a complete list of path-addressed errors.
//!
//! ## Features
//!
//! - **Total**: never panics on any JSON input; every problem is a [`Diagnostic`]
//! - **Batch-friendly**: [`normalize_batch`] runs payloads in parallel
//! - **Python bindings**: optional, via PyO3 (`python` feature)
//! - **Tracing**: optional spans and events (`tracing` feature)

pub mod errors;
pub mod normalize;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{QuizError, Result};
pub use types::{NormalizeOptions, NormalizedQuestion, NormalizedQuiz, FALLBACK_TITLE, OPTION_COUNT};

// Re-export main functionality
pub use normalize::{
    normalize_batch, normalize_document_json, normalize_json, validate_and_normalize_quiz,
    Diagnostic, DiagnosticCode, Diagnostics, JsonPath, NormalizeOutcome, QuizDocument,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
