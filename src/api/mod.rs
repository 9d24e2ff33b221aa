//! Catalog API Client
//!
//! HTTP bindings to the remote catalog API, organized by domain.

mod auth;
mod brands;
mod dashboard;
mod submit;
mod tags;
mod traits;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

pub use traits::BrandSource;

const API_KEY_HEADER: &str = "x-api-key";
const TOKEN_HEADER: &str = "token";

/// Thin wrapper over `reqwest::Client` carrying the runtime config
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match &self.config.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key.as_str()),
            None => builder,
        }
    }

    /// Request carrying the admin session token
    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).header(TOKEN_HEADER, token)
    }
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
    let response = builder.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_empty(builder: RequestBuilder) -> ApiResult<()> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_status(status.as_u16()))
    }
}
