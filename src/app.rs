//! Brand Catalog App
//!
//! Root component: provides context and switches pages on the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation::{Navigator, Route};
use crate::pages::{
    BrandReviewPage, DashboardPage, HomePage, LoginPage, NotFoundPage, SearchPage, SubmitPage,
};
use crate::store::{store_load_tags, CatalogState};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[App] Using API at {}", config.api_base_url);

    let ctx = AppContext::new(config);
    let nav = Navigator::install();
    let store = Store::new(CatalogState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(nav);
    provide_context(store);

    store_load_tags(store, ctx);

    let route = Memo::new(move |_| nav.route());

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Search => view! { <SearchPage /> }.into_any(),
                Route::Submit => view! { <SubmitPage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                Route::BrandReview(id) => view! { <BrandReviewPage id=id /> }.into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </div>
    }
}
