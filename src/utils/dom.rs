//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use frostpanel_core::StoreError;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::config::globals::CSRF_META;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Content of `<meta name="csrf-token">`, if the page carries one.
pub fn csrf_token() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", CSRF_META);
    document()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()
        .map(|meta| meta.content())
        .filter(|token| !token.is_empty())
}

/// Decode a global the server rendered into the page (`window.<name>`).
pub fn read_global<T: DeserializeOwned>(name: &'static str) -> Result<T, StoreError> {
    let window = window().ok_or(StoreError::Missing(name))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| StoreError::Missing(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(StoreError::Missing(name));
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| StoreError::Malformed {
        name,
        reason: e.to_string(),
    })
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.pathname`, `/` when unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Add `path` to the session history without reloading.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Replace the current history entry with `path` without reloading.
pub fn replace_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Full page navigation, leaving the single-page app.
pub fn assign_location(url: &str) {
    if let Some(window) = window() {
        let _ = window.location().assign(url);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_meta(content: &str) {
        let document = document().unwrap();
        let meta = document.create_element("meta").unwrap();
        meta.set_attribute("name", CSRF_META).unwrap();
        meta.set_attribute("content", content).unwrap();
        document.head().unwrap().append_child(&meta).unwrap();
    }

    fn remove_meta() {
        let document = document().unwrap();
        while let Some(meta) = document
            .query_selector(&format!("meta[name=\"{}\"]", CSRF_META))
            .unwrap()
        {
            meta.remove();
        }
    }

    #[wasm_bindgen_test]
    fn test_csrf_token_from_meta() {
        remove_meta();
        set_meta("s3cr3t");
        assert_eq!(csrf_token().as_deref(), Some("s3cr3t"));
        remove_meta();
    }

    #[wasm_bindgen_test]
    fn test_csrf_token_missing() {
        remove_meta();
        assert_eq!(csrf_token(), None);

        set_meta("");
        assert_eq!(csrf_token(), None);
        remove_meta();
    }

    #[wasm_bindgen_test]
    fn test_missing_global() {
        let result = read_global::<serde_json::Value>("FrostpanelDoesNotExist");
        assert_eq!(result, Err(StoreError::Missing("FrostpanelDoesNotExist")));
    }
}
