//! Diagnostics collected while normalizing a quiz.
//!
//! Every problem is recorded as a [`Diagnostic`] carrying a stable
//! [`DiagnosticCode`], a JSON-path-like locator into the *raw* input and a
//! human-readable message. Errors and warnings share the same shape; the
//! [`Diagnostics`] accumulator keeps them in separate ordered lists so that
//! all problems are reported at once.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error_code::DiagnosticCode;

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single finding, blocking (error) or informational (warning).
///
/// # Display format
///
/// ```text
/// [option_count] $.questions[1].options: options must contain exactly 4 elements (got: 3)
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{code}] {path}: {message}")]
pub struct Diagnostic {
    /// Stable code for programmatic matching.
    pub code: DiagnosticCode,

    /// Locator into the raw input, e.g. `$.questions[2].correctAnswer`.
    pub path: String,

    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
        }
    }
}

// ─── Paths ──────────────────────────────────────────────────────────────────

/// Builder for `$`-rooted locators.
///
/// Paths always use canonical field names (`questions`, `options`, ...)
/// whichever alias the raw input actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath(String);

impl JsonPath {
    pub fn root() -> Self {
        Self("$".to_string())
    }

    /// Append `.name`.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    /// Append `[index]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<JsonPath> for String {
    fn from(path: JsonPath) -> Self {
        path.0
    }
}

impl From<&JsonPath> for String {
    fn from(path: &JsonPath) -> Self {
        path.0.clone()
    }
}

// ─── Accumulator ────────────────────────────────────────────────────────────

/// Ordered error and warning lists threaded through a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blocking error.
    pub fn error(
        &mut self,
        code: DiagnosticCode,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        debug_assert!(code.is_error(), "{code} recorded as an error");
        self.errors.push(Diagnostic::new(code, path, message));
    }

    /// Record a non-blocking warning.
    pub fn warning(
        &mut self,
        code: DiagnosticCode,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        debug_assert!(!code.is_error(), "{code} recorded as a warning");
        self.warnings.push(Diagnostic::new(code, path, message));
    }

    /// Returns `true` if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
