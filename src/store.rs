//! Global Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::AppContext;
use crate::models::TagRef;

/// Data shared by every screen
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Tag catalog from `GET /tags`
    pub tags: Vec<TagRef>,
    /// Set once the catalog request has been issued
    pub tags_requested: bool,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Tag catalog (tracked)
pub fn store_tags(store: &CatalogStore) -> Vec<TagRef> {
    store.tags().get()
}

/// Fetch the tag catalog once per session. Failures leave it empty.
pub fn store_load_tags(store: CatalogStore, ctx: AppContext) {
    if store.tags_requested().get_untracked() {
        return;
    }
    *store.tags_requested().write() = true;
    spawn_local(async move {
        match ctx.api().list_tags().await {
            Ok(tags) => {
                log::debug!("[Store] Loaded {} tags", tags.len());
                *store.tags().write() = tags;
            }
            Err(e) => {
                log::warn!("[Store] Tag catalog unavailable: {}", e);
                *store.tags_requested().write() = false;
            }
        }
    });
}
