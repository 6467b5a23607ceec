//! Validation and normalization of untrusted quiz payloads.
//!
//! ## Submodules
//!
//! - [`quiz`] — entry point and [`NormalizeOutcome`]
//! - [`question`] — per-question checks
//! - [`answer`] — correct-answer resolution
//! - [`value`] — alias lookup and JS-style stringification
//! - [`diagnostics`] / [`error_code`] — the error and warning vocabulary
//! - [`batch`] — parallel normalization

/// Emit a tracing event (when the `tracing` feature is enabled). When
/// disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod answer;
pub mod batch;
pub mod diagnostics;
pub mod error_code;
pub mod question;
pub mod quiz;
pub mod value;

pub use batch::normalize_batch;
pub use diagnostics::{Diagnostic, Diagnostics, JsonPath};
pub use error_code::DiagnosticCode;
pub use quiz::{
    normalize_document_json, normalize_json, validate_and_normalize_quiz, NormalizeOutcome,
    QuizDocument,
};
