//! Resource locator bindings.

use resdraw_core::locator::{self, Locator};
use resdraw_core::request::Request;
use wasm_bindgen::prelude::*;

/// Check whether a URI uses one of the resource schemes.
///
/// Unparseable input is simply not handled.
#[wasm_bindgen]
pub fn can_handle_uri(uri: &str) -> bool {
    Request::parse(uri).is_ok_and(|request| locator::can_handle(&request))
}

/// Rewrite a generic resource URI to the alternate scheme.
///
/// # Errors
/// Returns an error if `uri` cannot be parsed.
#[wasm_bindgen]
pub fn normalize_uri(uri: &str) -> Result<String, JsValue> {
    Locator::parse(uri)
        .map(|l| locator::normalize_scheme(l).to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the alternate-scheme URI for a numeric resource id.
#[wasm_bindgen]
pub fn uri_from_resource(package: &str, resource_id: i32) -> String {
    locator::uri_from_resource(package, resource_id).to_string()
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_normalize_uri() {
        assert_eq!(
            normalize_uri("android.resource://com.example/drawable/icon").unwrap(),
            "alt.android.resource://com.example/drawable/icon"
        );
        assert!(normalize_uri("not a uri").is_err());
    }
}
