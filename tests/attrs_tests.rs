// Host-side tests for data-attribute parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod attrs {
    include!("../src/core/attrs.rs");
}

use attrs::*;
use std::time::Duration;

#[test]
fn f32_attr_falls_back_on_bad_input() {
    assert_eq!(parse_f32_attr(Some("15"), 10.0), 15.0);
    assert_eq!(parse_f32_attr(Some(" 0.5 "), 10.0), 0.5);
    assert_eq!(parse_f32_attr(Some(""), 10.0), 10.0);
    assert_eq!(parse_f32_attr(Some("abc"), 10.0), 10.0);
    assert_eq!(parse_f32_attr(Some("-3"), 10.0), 10.0);
    assert_eq!(parse_f32_attr(Some("NaN"), 10.0), 10.0);
    assert_eq!(parse_f32_attr(None, 10.0), 10.0);
}

#[test]
fn ms_attr_parses_whole_milliseconds() {
    assert_eq!(parse_ms_attr(Some("80"), 100), Duration::from_millis(80));
    assert_eq!(parse_ms_attr(Some("fast"), 100), Duration::from_millis(100));
    assert_eq!(parse_ms_attr(None, 2000), Duration::from_millis(2000));
}

#[test]
fn numbers_may_be_signed_or_fractional() {
    assert_eq!(parse_number(Some("135")), Some(135.0));
    assert_eq!(parse_number(Some("3.5")), Some(3.5));
    assert_eq!(parse_number(Some("-2")), Some(-2.0));
    assert_eq!(parse_number(Some("inf")), None);
    assert_eq!(parse_number(Some("")), None);
}

#[test]
fn words_split_on_pipes() {
    assert_eq!(
        parse_words(Some("Rust | WebAssembly||Motion ")),
        vec!["Rust", "WebAssembly", "Motion"]
    );
    assert!(parse_words(Some(" | ")).is_empty());
    assert!(parse_words(None).is_empty());
}
