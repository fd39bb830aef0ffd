//! Helpers for extracting typed parameters from a `serde_json::Value`.
//!
//! Missing keys and wrong types fall back to the supplied default, so a
//! partial params object is always usable. Validation of the resulting
//! values happens separately, at construction.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, or `default` if missing or not a
/// number.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, or `default` if missing or not a
/// non-negative integer.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `u8` from `params[name]`, or `default` if missing, not an
/// integer, or out of the 0..=255 range.
pub fn param_u8(params: &Value, name: &str, default: u8) -> u8 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u8::try_from(v).ok())
        .unwrap_or(default)
}
