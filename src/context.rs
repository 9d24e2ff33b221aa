//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Admin access token (memory only, gone on reload)
    pub token: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            token: RwSignal::new(None),
        }
    }

    /// Fresh client for the configured API
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }

    pub fn search_debounce_ms(&self) -> u32 {
        self.config.with_value(|c| c.search_debounce_ms)
    }

    pub fn set_token(&self, token: String) {
        self.token.set(Some(token));
    }

    /// Untracked read for use inside event handlers and tasks
    pub fn current_token(&self) -> Option<String> {
        self.token.get_untracked()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
