//! Invisible reCAPTCHA challenge through the page's `grecaptcha` global.

use frostpanel_core::LoginError;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn unavailable(reason: impl Into<String>) -> LoginError {
    LoginError::RecaptchaUnavailable(reason.into())
}

fn describe(value: JsValue) -> LoginError {
    unavailable(
        value
            .as_string()
            .unwrap_or_else(|| "grecaptcha rejected the challenge".to_string()),
    )
}

/// Run the challenge for `site_key` and return the response token.
pub async fn execute(site_key: &str, action: &str) -> Result<String, LoginError> {
    let window = web_sys::window().ok_or_else(|| unavailable("browser window not available"))?;
    let grecaptcha = Reflect::get(&window, &JsValue::from_str("grecaptcha")).map_err(describe)?;
    if grecaptcha.is_undefined() {
        return Err(unavailable("grecaptcha is not loaded"));
    }

    let execute: Function = Reflect::get(&grecaptcha, &JsValue::from_str("execute"))
        .map_err(describe)?
        .dyn_into()
        .map_err(|_| unavailable("grecaptcha.execute is not a function"))?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("action"), &JsValue::from_str(action))
        .map_err(describe)?;

    let promise: Promise = execute
        .call2(&grecaptcha, &JsValue::from_str(site_key), &options)
        .map_err(describe)?
        .dyn_into()
        .map_err(|_| unavailable("grecaptcha.execute did not return a promise"))?;

    JsFuture::from(promise)
        .await
        .map_err(describe)?
        .as_string()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unavailable("empty reCAPTCHA token"))
}
