//! Runtime Configuration
//!
//! The host page may set `window.__PORTFOLIO_CONFIG__` before the bundle
//! loads; missing fields keep their defaults.

use portfolio_core::SiteConfig;
use thiserror::Error;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__PORTFOLIO_CONFIG__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Read the host-provided config, or the defaults when there is none
pub fn read_site_config() -> Result<SiteConfig, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(SiteConfig::default());
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return Ok(SiteConfig::default());
    }
    serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
}
