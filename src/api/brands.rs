//! Brand Endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::{send_json, ApiClient, BrandSource};
use crate::error::ApiResult;
use crate::models::{Brand, BrandPayload};
use crate::query::{PAGE_PARAM, SEARCH_PARAM, TAGS_PARAM};

impl ApiClient {
    pub async fn list_brands(&self, page: u32, tags: &[String]) -> ApiResult<BrandPayload> {
        let mut params: Vec<(&str, String)> = vec![(PAGE_PARAM, page.to_string())];
        params.extend(tags.iter().map(|id| (TAGS_PARAM, id.clone())));
        send_json(self.request(Method::GET, "/brands").query(&params)).await
    }

    pub async fn search(&self, query: &str, page: Option<u32>) -> ApiResult<BrandPayload> {
        let mut params: Vec<(&str, String)> = vec![(SEARCH_PARAM, query.to_string())];
        if let Some(page) = page {
            params.push((PAGE_PARAM, page.to_string()));
        }
        send_json(self.request(Method::GET, "/brands/search").query(&params)).await
    }

    pub async fn get_brand(&self, id: &str) -> ApiResult<Brand> {
        send_json(self.request(Method::GET, &format!("/brands/{}", id))).await
    }
}

#[async_trait(?Send)]
impl BrandSource for ApiClient {
    async fn brand_page(&self, page: u32, tags: &[String]) -> ApiResult<BrandPayload> {
        self.list_brands(page, tags).await
    }

    async fn search_brands(&self, query: &str, page: Option<u32>) -> ApiResult<BrandPayload> {
        self.search(query, page).await
    }
}
