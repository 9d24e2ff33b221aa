//! Tag Endpoints

use reqwest::Method;

use super::{send_json, ApiClient};
use crate::error::ApiResult;
use crate::models::TagRef;

impl ApiClient {
    /// Full tag catalog (`GET /tags`)
    pub async fn list_tags(&self) -> ApiResult<Vec<TagRef>> {
        send_json(self.request(Method::GET, "/tags")).await
    }
}
