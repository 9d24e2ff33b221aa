//! Search Page
//!
//! Paginated results for `?search=`, narrowed client-side by the tag
//! selection kept in the same URL.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BrandGrid, BrandModal, Navbar, Pagination, TagFilter};
use crate::context::use_app_context;
use crate::fetch::{self, RequestGate};
use crate::filter::filter_by_tags;
use crate::models::Brand;
use crate::navigation::use_navigator;
use crate::pages::home::scroll_to_top;
use crate::pagination::{FetchStatus, PageState};
use crate::query::{TagSelection, ViewState, SEARCH_PARAM};
use crate::store::{store_load_tags, store_tags, use_catalog_store};

const PATH: &str = "/search";

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();
    let store = use_catalog_store();
    store_load_tags(store, ctx);
    let catalog = Signal::derive(move || store_tags(&store));

    let view_state = Memo::new(move |_| nav.view_state());
    let page = Memo::new(move |_| view_state.with(|s| s.page));
    let tags = Memo::new(move |_| view_state.with(|s| s.filter.tags.clone()));
    let query = Memo::new(move |_| view_state.with(|s| s.filter.query.trim().to_string()));

    let (results, set_results) = signal(Vec::<Brand>::new());
    let (total_pages, set_total_pages) = signal(1u32);
    let (status, set_status) = signal(FetchStatus::Idle);
    let (open_brand, set_open_brand) = signal(None::<String>);
    // Navbar text is local here; results follow the URL only
    let (draft, set_draft) = signal(String::new());
    let gate = RequestGate::default();
    on_cleanup({
        let gate = gate.clone();
        move || gate.close()
    });

    let navigate = move |next: ViewState, replace: bool| {
        let href = next.href(PATH, SEARCH_PARAM);
        if replace {
            nav.replace(&href);
        } else {
            nav.push(&href);
        }
    };

    Effect::new(move |_| {
        let text = query.get();
        let page = page.get();
        let gate = gate.clone();
        let ticket = gate.begin();
        set_status.set(FetchStatus::Loading);
        spawn_local(async move {
            let result = fetch::load_search_page(&ctx.api(), &text, page).await;
            if !gate.is_current(ticket) {
                return;
            }
            match result {
                Ok(list) => {
                    log::debug!("[SearchPage] {:?} page {}: {} results", text, page, list.items.len());
                    set_total_pages.set(list.total_pages);
                    set_results.set(list.items);
                    set_status.set(FetchStatus::Success);
                }
                Err(e) => {
                    log::error!("[SearchPage] Search {:?} failed: {}", text, e);
                    set_results.set(Vec::new());
                    set_status.set(FetchStatus::Error(format!("Failed to search brands: {}", e)));
                }
            }
        });
    });

    Effect::new(move |_| {
        page.track();
        scroll_to_top();
    });

    let displayed = Memo::new(move |_| results.with(|r| tags.with(|t| filter_by_tags(r, t))));

    view! {
        <Navbar query=draft on_query=move |text: String| set_draft.set(text) />
        <main class="page search-page">
            <h1>{move || format!("Search Results for \"{}\"", query.get())}</h1>
            <TagFilter
                catalog=catalog
                selection=Signal::derive(move || tags.get())
                on_change=move |sel: TagSelection| navigate(view_state.get_untracked().with_tags(sel), true)
            />
            <BrandGrid
                brands=Signal::derive(move || displayed.get())
                catalog=catalog
                loading=Signal::derive(move || status.with(|s| s.is_loading()))
                error=Signal::derive(move || status.with(|s| s.error().map(str::to_string)))
                empty_message="No brands found matching your search.".to_string()
                on_open=move |id: String| set_open_brand.set(Some(id))
            />
            <Pagination
                state=Signal::derive(move || PageState::new(page.get(), total_pages.get()))
                loading=Signal::derive(move || status.with(|s| s.is_loading()))
                on_change=move |p: u32| navigate(view_state.get_untracked().with_page(p), false)
            />
        </main>
        <BrandModal
            brand_id=open_brand
            catalog=catalog
            on_close=move |_| set_open_brand.set(None)
        />
    }
}
