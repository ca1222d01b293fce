//! Browser services: dialogs, session storage, navigation and the clock.
//!
//! Off the browser these degrade to console logging and empty values so the
//! crate still builds and tests natively.

use jiff::Timestamp;
use leptos::logging;
use nixgelato_client::{ApiClient, ApiError, BearerToken};

#[cfg(target_arch = "wasm32")]
use nixgelato_client::TOKEN_STORAGE_KEY;

/// Login screen, served outside this app.
pub const LOGIN_PATH: &str = "/login";

/// API root baked in at build time. Same origin when unset.
const API_URL: Option<&str> = option_env!("NIXGELATO_API_URL");

/// Build an API client from the stored session token.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] when nobody is logged in, or
/// [`ApiError::InvalidBaseUrl`] when the API root is unusable.
pub fn connect() -> Result<ApiClient, ApiError> {
    let token = BearerToken::from_stored(stored_token())?;

    ApiClient::new(&api_base_url(), token)
}

fn api_base_url() -> String {
    API_URL
        .filter(|url| !url.trim().is_empty())
        .map_or_else(origin, str::to_string)
}

/// Current time from the browser clock.
pub fn now() -> Timestamp {
    Timestamp::now()
}

#[cfg(target_arch = "wasm32")]
fn js_value_message(error: &wasm_bindgen::JsValue, fallback: &str) -> String {
    error.as_string().unwrap_or_else(|| fallback.to_string())
}

/// Show a blocking message.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        logging::warn!("{message}");
        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        logging::warn!("{}", js_value_message(&error, "alert failed"));
    }
}

/// Show a blocking message.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    logging::log!("{message}");
}

/// Ask a yes/no question; anything but an explicit yes is a no.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask a yes/no question; anything but an explicit yes is a no.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(message: &str) -> bool {
    logging::log!("{message}");

    false
}

#[cfg(target_arch = "wasm32")]
fn stored_token() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_token() -> Option<String> {
    None
}

/// Path of the current page.
#[cfg(target_arch = "wasm32")]
pub fn pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Path of the current page.
#[cfg(not(target_arch = "wasm32"))]
pub fn pathname() -> String {
    "/".to_string()
}

#[cfg(target_arch = "wasm32")]
fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn origin() -> String {
    String::new()
}

/// Leave for `path` without keeping the current page in history.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(error) = window.location().replace(path) {
        logging::error!("{}", js_value_message(&error, "redirect failed"));
    }
}

/// Leave for `path` without keeping the current page in history.
#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    logging::log!("redirect to {path}");
}

/// Navigate to `path`.
#[cfg(target_arch = "wasm32")]
pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(error) = window.location().set_href(path) {
        logging::error!("{}", js_value_message(&error, "navigation failed"));
    }
}

/// Navigate to `path`.
#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(path: &str) {
    logging::log!("navigate to {path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_without_session_asks_for_login() {
        assert!(matches!(connect(), Err(ApiError::MissingToken)));
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(!confirm("¿Estás seguro de que quieres vaciar el pedido?"));
    }
}
