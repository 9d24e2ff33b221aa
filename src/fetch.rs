//! List and Search Fetchers
//!
//! Normalizes both `GET /brands` payload shapes, applies the step-back rule
//! for empty trailing pages, and gates responses by request generation so a
//! slow stale response can't overwrite a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::BrandSource;
use crate::error::ApiResult;
use crate::models::{Brand, BrandPayload};
use crate::query::TagSelection;

/// One page of brands plus the server's page count (≥ 1)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandList {
    pub items: Vec<Brand>,
    pub total_pages: u32,
}

pub fn normalize(payload: BrandPayload) -> BrandList {
    match payload {
        BrandPayload::Bare(items) => BrandList { items, total_pages: 1 },
        BrandPayload::Paged { brands, total_pages } => BrandList {
            items: brands.unwrap_or_default(),
            total_pages: total_pages.unwrap_or(1).max(1),
        },
    }
}

/// Result of loading a list page
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Loaded(BrandList),
    /// The page came back empty; navigate to this page instead
    StepBack(u32),
}

/// Empty page past the first → go back one page
pub fn settle(page: u32, list: BrandList) -> ListOutcome {
    if list.items.is_empty() && page > 1 {
        ListOutcome::StepBack(page - 1)
    } else {
        ListOutcome::Loaded(list)
    }
}

/// List Fetcher: one page, optionally narrowed server-side by tags
pub async fn load_page<S: BrandSource + ?Sized>(
    source: &S,
    page: u32,
    tags: &TagSelection,
) -> ApiResult<ListOutcome> {
    let payload = source.brand_page(page, tags.ids()).await?;
    Ok(settle(page, normalize(payload)))
}

/// Search Fetcher for the live search box.
///
/// Blank queries return nothing without touching the network, and a
/// failed request degrades to an empty result.
pub async fn live_search<S: BrandSource + ?Sized>(source: &S, query: &str) -> Vec<Brand> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    match source.search_brands(query, None).await {
        Ok(payload) => normalize(payload).items,
        Err(e) => {
            log::warn!("[Search] '{}' failed: {}", query, e);
            Vec::new()
        }
    }
}

/// Paginated search for the search view. Blank query → empty single page.
pub async fn load_search_page<S: BrandSource + ?Sized>(
    source: &S,
    query: &str,
    page: u32,
) -> ApiResult<BrandList> {
    if query.trim().is_empty() {
        return Ok(BrandList { items: Vec::new(), total_pages: 1 });
    }
    let payload = source.search_brands(query.trim(), Some(page)).await?;
    Ok(normalize(payload))
}

/// Generation ticket handed out by a [`RequestGate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter for one view.
///
/// Every new request takes a ticket; only the newest ticket may apply its
/// response.
#[derive(Debug, Clone, Default)]
pub struct RequestGate(Arc<AtomicU64>);

impl RequestGate {
    pub fn begin(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate every outstanding ticket (view unmounted)
    pub fn close(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::TagEntry;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    fn brand(id: &str) -> Brand {
        Brand {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            image: String::new(),
            tags: Some(vec![TagEntry::Id("t".into())]),
            links: None,
            primary_color: None,
            status: None,
        }
    }

    /// In-memory source recording every call
    #[derive(Default)]
    struct MockSource {
        pages: RefCell<Vec<(u32, Vec<String>)>>,
        searches: Cell<usize>,
        page_payload: Option<BrandPayload>,
        fail_search: bool,
    }

    #[async_trait(?Send)]
    impl BrandSource for MockSource {
        async fn brand_page(&self, page: u32, tags: &[String]) -> ApiResult<BrandPayload> {
            self.pages.borrow_mut().push((page, tags.to_vec()));
            self.page_payload.clone().ok_or(ApiError::Status(500))
        }

        async fn search_brands(&self, query: &str, _page: Option<u32>) -> ApiResult<BrandPayload> {
            self.searches.set(self.searches.get() + 1);
            if self.fail_search {
                Err(ApiError::Network("offline".into()))
            } else {
                Ok(BrandPayload::Bare(vec![brand(query)]))
            }
        }
    }

    #[test]
    fn test_normalize_bare_array() {
        let list = normalize(BrandPayload::Bare(vec![brand("a"), brand("b"), brand("c")]));
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.total_pages, 1);
    }

    #[test]
    fn test_normalize_paged_defaults() {
        let list = normalize(BrandPayload::Paged { brands: None, total_pages: Some(0) });
        assert_eq!(list, BrandList { items: vec![], total_pages: 1 });

        let list = normalize(BrandPayload::Paged { brands: Some(vec![brand("a")]), total_pages: Some(5) });
        assert_eq!(list.total_pages, 5);
    }

    #[test]
    fn test_settle_steps_back_only_past_first_page() {
        let empty = BrandList { items: vec![], total_pages: 2 };
        assert_eq!(settle(3, empty.clone()), ListOutcome::StepBack(2));
        assert_eq!(settle(1, empty.clone()), ListOutcome::Loaded(empty));

        let full = BrandList { items: vec![brand("a")], total_pages: 2 };
        assert_eq!(settle(2, full.clone()), ListOutcome::Loaded(full));
    }

    #[tokio::test]
    async fn test_load_page_passes_tags_and_steps_back() {
        let source = MockSource {
            page_payload: Some(BrandPayload::Paged { brands: Some(vec![]), total_pages: Some(2) }),
            ..Default::default()
        };
        let tags: TagSelection = vec!["x".to_string(), "y".to_string()].into_iter().collect();
        let outcome = load_page(&source, 5, &tags).await.unwrap();
        assert_eq!(outcome, ListOutcome::StepBack(4));
        assert_eq!(source.pages.borrow()[0], (5, vec!["x".to_string(), "y".to_string()]));
    }

    #[tokio::test]
    async fn test_load_page_propagates_errors() {
        let source = MockSource::default();
        let err = load_page(&source, 1, &TagSelection::default()).await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn test_blank_query_skips_network() {
        let source = MockSource::default();
        assert!(live_search(&source, "").await.is_empty());
        assert!(live_search(&source, "   \t").await.is_empty());
        let list = load_search_page(&source, " ", 3).await.unwrap();
        assert_eq!(list, BrandList { items: vec![], total_pages: 1 });
        assert_eq!(source.searches.get(), 0);
    }

    #[tokio::test]
    async fn test_failed_search_is_empty() {
        let source = MockSource { fail_search: true, ..Default::default() };
        assert!(live_search(&source, "nile").await.is_empty());
        assert_eq!(source.searches.get(), 1);
    }

    #[tokio::test]
    async fn test_live_search_returns_results() {
        let source = MockSource::default();
        let results = live_search(&source, "nile").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "nile");
    }

    #[test]
    fn test_gate_only_latest_ticket_is_current() {
        let gate = RequestGate::default();
        let first = gate.begin();
        assert!(gate.is_current(first));
        let second = gate.clone().begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[tokio::test]
    async fn test_closed_gate_drops_in_flight_step_back() {
        let source = MockSource {
            page_payload: Some(BrandPayload::Paged { brands: Some(vec![]), total_pages: Some(4) }),
            ..Default::default()
        };
        let gate = RequestGate::default();
        let ticket = gate.begin();
        let handle = gate.clone();

        // Page 5 comes back empty, but the view went away meanwhile
        handle.close();
        let outcome = load_page(&source, 5, &TagSelection::default()).await.unwrap();
        assert_eq!(outcome, ListOutcome::StepBack(4));
        assert!(!gate.is_current(ticket));
    }
}
