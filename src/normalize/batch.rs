//! Parallel normalization of many payloads.

use rayon::prelude::*;
use serde_json::Value;

use super::quiz::{validate_and_normalize_quiz, NormalizeOutcome};
use crate::types::NormalizeOptions;

/// Normalize every payload in `raws`, in parallel.
///
/// Outcomes are returned in input order. Each payload is handled
/// independently; one invalid quiz does not affect the others.
pub fn normalize_batch(raws: &[Value], options: &NormalizeOptions) -> Vec<NormalizeOutcome> {
    trace_event!(debug, payloads = raws.len(), "normalizing batch");
    raws.par_iter()
        .map(|raw| validate_and_normalize_quiz(raw, options))
        .collect()
}
