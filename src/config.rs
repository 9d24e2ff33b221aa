//! Runtime Configuration
//!
//! Defaults are baked in at compile time from `BRAND_CATALOG_API_URL` and
//! `BRAND_CATALOG_API_KEY`. The host page may override any field by defining
//! `window.__BRAND_CATALOG_CONFIG__` before the bundle loads.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 250;
const CONFIG_GLOBAL: &str = "__BRAND_CATALOG_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the catalog API, without trailing slash
    pub api_base_url: String,
    /// Sent as `x-api-key` on every request when set
    pub api_key: Option<String>,
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("BRAND_CATALOG_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            api_key: option_env!("BRAND_CATALOG_API_KEY").map(str::to_string),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// Load the config, applying the page-provided override object if present.
    pub fn load() -> Self {
        let global = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(global)
    }

    fn from_js(value: JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<AppConfig>(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[Config] Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    /// Join the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = AppConfig {
            api_base_url: "https://api.example.com/".to_string(),
            api_key: None,
            search_debounce_ms: 0,
        };
        assert_eq!(config.endpoint("/brands"), "https://api.example.com/brands");
        assert_eq!(config.endpoint("tags"), "https://api.example.com/tags");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"apiKey": "k-123"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{"apiBaseUrl": "https://x.test", "searchDebounceMs": 400}"#).unwrap();
        assert_eq!(config.api_base_url, "https://x.test");
        assert_eq!(config.search_debounce_ms, 400);
    }
}
