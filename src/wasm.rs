//! Expose the `sidediff` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around [`crate::compute_diff`], returning the full result
/// serialized as a JSON string with camelCase field names, ready for a
/// rendering front-end.
///
/// # Panics
///
/// If serialization to JSON fails which should not happen
#[wasm_bindgen(js_name = computeDiff)]
#[must_use]
pub fn compute_diff(original: &str, modified: &str) -> String {
    set_panic_hook();

    serde_json::to_string(&crate::compute_diff(original, modified))
        .expect("Failed to serialize diff result")
}

/// WASM wrapper returning only the addition and deletion counts, for
/// callers that don't need the rows.
#[wasm_bindgen(js_name = computeDiffStats)]
#[must_use]
pub fn compute_diff_stats(original: &str, modified: &str) -> DiffStats {
    set_panic_hook();

    let result = crate::compute_diff(original, modified);
    DiffStats {
        additions: result.additions,
        deletions: result.deletions,
    }
}

/// WASM wrapper type holding the counts of changed lines.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
