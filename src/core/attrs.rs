// Parsing of per-element `data-*` overrides. Missing, empty, non-finite or
// negative values fall back to the given default.

use std::time::Duration;

pub fn parse_f32_attr(raw: Option<&str>, default: f32) -> f32 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

pub fn parse_ms_attr(raw: Option<&str>, default_ms: u64) -> Duration {
    let ms = raw
        .map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}

/// Signed numeric target such as `data-count-up="3.5"`.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// `"Rust|WebAssembly|Motion"` → three words. Empty segments are dropped.
pub fn parse_words(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
