//! Home Page
//!
//! Paginated brand list with live search and a tag filter. Page, query and
//! tag selection all live in the URL; this view only derives from it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BrandGrid, BrandModal, Navbar, Pagination, TagFilter};
use crate::context::use_app_context;
use crate::fetch::{self, ListOutcome, RequestGate};
use crate::filter::filter_by_tags;
use crate::models::Brand;
use crate::navigation::use_navigator;
use crate::pagination::{FetchStatus, PageState};
use crate::query::{TagSelection, ViewState, QUERY_PARAM};
use crate::store::{store_load_tags, store_tags, use_catalog_store};

const PATH: &str = "/";

/// Scroll the window back to the top of the list
pub(crate) fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();
    let store = use_catalog_store();
    store_load_tags(store, ctx);
    let catalog = Signal::derive(move || store_tags(&store));

    // URL-derived state
    let view_state = Memo::new(move |_| nav.view_state());
    let page = Memo::new(move |_| view_state.with(|s| s.page));
    let tags = Memo::new(move |_| view_state.with(|s| s.filter.tags.clone()));
    let query = Memo::new(move |_| view_state.with(|s| s.filter.query.clone()));
    let has_query = Memo::new(move |_| view_state.with(|s| s.filter.has_query()));

    let (brands, set_brands) = signal(Vec::<Brand>::new());
    let (total_pages, set_total_pages) = signal(1u32);
    let (status, set_status) = signal(FetchStatus::Idle);
    let (search_results, set_search_results) = signal(Vec::<Brand>::new());
    let (searching, set_searching) = signal(false);
    let (open_brand, set_open_brand) = signal(None::<String>);

    let list_gate = RequestGate::default();
    let search_gate = RequestGate::default();
    {
        let (list_gate, search_gate) = (list_gate.clone(), search_gate.clone());
        on_cleanup(move || {
            list_gate.close();
            search_gate.close();
        });
    }

    let navigate = move |next: ViewState, replace: bool| {
        let href = next.href(PATH, QUERY_PARAM);
        if replace {
            nav.replace(&href);
        } else {
            nav.push(&href);
        }
    };

    // List Fetcher: page and tags, never the query
    Effect::new(move |_| {
        let page = page.get();
        let tags = tags.get();
        let gate = list_gate.clone();
        let ticket = gate.begin();
        set_status.set(FetchStatus::Loading);
        spawn_local(async move {
            let result = fetch::load_page(&ctx.api(), page, &tags).await;
            if !gate.is_current(ticket) {
                return;
            }
            match result {
                Ok(ListOutcome::Loaded(list)) => {
                    log::debug!("[HomePage] Page {} loaded: {} brands", page, list.items.len());
                    set_total_pages.set(list.total_pages);
                    set_brands.set(list.items);
                    set_status.set(FetchStatus::Success);
                }
                Ok(ListOutcome::StepBack(prev)) => {
                    log::info!("[HomePage] Page {} is empty, stepping back to {}", page, prev);
                    if let Some(state) = view_state.try_get_untracked() {
                        navigate(state.with_page(prev), false);
                    }
                }
                Err(e) => {
                    log::error!("[HomePage] Failed to load page {}: {}", page, e);
                    set_status.set(FetchStatus::Error(format!("Failed to fetch brands: {}", e)));
                }
            }
        });
    });

    // Search Fetcher: debounced, latest query wins
    Effect::new(move |_| {
        let text = query.get();
        let gate = search_gate.clone();
        let ticket = gate.begin();
        if text.trim().is_empty() {
            set_search_results.set(Vec::new());
            set_searching.set(false);
            return;
        }
        set_searching.set(true);
        let delay = ctx.search_debounce_ms();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if !gate.is_current(ticket) {
                return;
            }
            let results = fetch::live_search(&ctx.api(), &text).await;
            if gate.is_current(ticket) {
                set_search_results.set(results);
                set_searching.set(false);
            }
        });
    });

    Effect::new(move |_| {
        page.track();
        scroll_to_top();
    });

    let displayed = Memo::new(move |_| {
        let source = if has_query.get() { search_results.get() } else { brands.get() };
        tags.with(|t| filter_by_tags(&source, t))
    });

    let heading = move || {
        if has_query.get() {
            format!("Search Results for \"{}\"", query.get().trim())
        } else {
            "Brands".to_string()
        }
    };
    let empty_message = Signal::derive(move || {
        if has_query.get() {
            "No brands found matching your search.".to_string()
        } else {
            "No brands found.".to_string()
        }
    });

    view! {
        <Navbar
            query=Signal::derive(move || query.get())
            on_query=move |text: String| navigate(view_state.get_untracked().with_query(text), true)
        />
        <main class="page home-page">
            <h1>{heading}</h1>
            <TagFilter
                catalog=catalog
                selection=Signal::derive(move || tags.get())
                on_change=move |sel: TagSelection| navigate(view_state.get_untracked().with_tags(sel), true)
            />
            <BrandGrid
                brands=Signal::derive(move || displayed.get())
                catalog=catalog
                loading=Signal::derive(move || {
                    if has_query.get() { searching.get() } else { status.with(|s| s.is_loading()) }
                })
                error=Signal::derive(move || {
                    if has_query.get() { None } else { status.with(|s| s.error().map(str::to_string)) }
                })
                loading_message=Signal::derive(move || {
                    if has_query.get() { "Searching...".to_string() } else { "Loading brands...".to_string() }
                })
                empty_message=empty_message
                on_open=move |id: String| set_open_brand.set(Some(id))
            />
            <Show when=move || !has_query.get()>
                <Pagination
                    state=Signal::derive(move || PageState::new(page.get(), total_pages.get()))
                    loading=Signal::derive(move || status.with(|s| s.is_loading()))
                    on_change=move |p: u32| navigate(view_state.get_untracked().with_page(p), false)
                />
            </Show>
        </main>
        <BrandModal
            brand_id=open_brand
            catalog=catalog
            on_close=move |_| set_open_brand.set(None)
        />
    }
}
