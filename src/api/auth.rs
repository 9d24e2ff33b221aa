//! Auth Endpoints

use reqwest::Method;

use super::{send_json, ApiClient};
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchange credentials for an admin access token
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest { username, password };
        let response: LoginResponse =
            send_json(self.request(Method::POST, "/auth/login").json(&body)).await?;
        Ok(response.access_token)
    }
}
