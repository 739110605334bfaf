#![cfg(feature = "wasm")]

use sidediff::wasm::{compute_diff, compute_diff_stats};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_compute_diff_returns_camel_case_json() {
    let json = compute_diff("a\nb", "a\nc");

    assert!(json.contains("\"originalLines\""));
    assert!(json.contains("\"modifiedLines\""));
    assert!(json.contains("\"additions\":1"));
    assert!(json.contains("\"deletions\":1"));
}

#[wasm_bindgen_test(unsupported = test)]
fn test_compute_diff_serializes_parts() {
    let json = compute_diff("hello world", "hello there");

    assert!(json.contains("\"parts\""));
    assert!(json.contains("\"kind\":\"equal\""));
    assert!(json.contains("\"content\":\"hello \""));
}

#[wasm_bindgen_test(unsupported = test)]
fn test_compute_diff_stats() {
    let stats = compute_diff_stats("a\nb\nc", "a\nc");

    assert_eq!(stats.additions, 0);
    assert_eq!(stats.deletions, 1);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_identical_inputs_have_no_changes() {
    let stats = compute_diff_stats("same", "same");

    assert_eq!(stats.additions, 0);
    assert_eq!(stats.deletions, 0);
}
