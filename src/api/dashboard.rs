//! Dashboard (Admin) Endpoints
//!
//! Every call carries the session token; a 401 comes back as
//! `ApiError::Unauthorized`.

use reqwest::Method;

use super::{send_empty, send_json, ApiClient};
use crate::error::ApiResult;
use crate::models::{Brand, BrandPatch};

impl ApiClient {
    pub async fn dashboard_brands(&self, token: &str) -> ApiResult<Vec<Brand>> {
        send_json(self.authed(Method::GET, "/dashboard/brands", token)).await
    }

    /// Full brand record for the review page
    pub async fn admin_brand(&self, id: &str, token: &str) -> ApiResult<Brand> {
        send_json(self.authed(Method::GET, &format!("/brands/{}", id), token)).await
    }

    pub async fn patch_brand(&self, id: &str, patch: &BrandPatch, token: &str) -> ApiResult<Brand> {
        let path = format!("/dashboard/brands/{}", id);
        send_json(self.authed(Method::PATCH, &path, token).json(patch)).await
    }

    pub async fn delete_brand(&self, id: &str, token: &str) -> ApiResult<()> {
        let path = format!("/dashboard/brands/{}", id);
        send_empty(self.authed(Method::DELETE, &path, token)).await
    }
}
