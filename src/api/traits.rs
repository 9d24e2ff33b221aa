//! Brand Source Trait
//!
//! The seam between the list/search fetchers and the HTTP client.
//! Tests substitute an in-memory source.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::BrandPayload;

/// Anything that can serve brand pages and search results
#[async_trait(?Send)]
pub trait BrandSource {
    /// `GET /brands?page=N&tags=...`
    async fn brand_page(&self, page: u32, tags: &[String]) -> ApiResult<BrandPayload>;

    /// `GET /brands/search?search=Q[&page=N]`
    async fn search_brands(&self, query: &str, page: Option<u32>) -> ApiResult<BrandPayload>;
}
