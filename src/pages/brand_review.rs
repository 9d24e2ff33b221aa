//! Brand Review Page
//!
//! Admin edit form for one brand: update fields, approve/reject, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, LinksEditor, NavLink, TagFilter};
use crate::context::use_app_context;
use crate::dashboard::review_patch;
use crate::error::ApiError;
use crate::models::{Brand, BrandPatch, BrandStatus};
use crate::navigation::use_navigator;
use crate::pages::NotFoundPage;
use crate::pagination::FetchStatus;
use crate::query::TagSelection;
use crate::store::{store_load_tags, store_tags, use_catalog_store};
use crate::submission::editable_links;

const UPDATE_SUCCESS: &str = "Brand updated successfully!";

/// Editable copy of a brand
#[derive(Clone, Copy)]
struct ReviewFields {
    name: RwSignal<String>,
    description: RwSignal<String>,
    links: RwSignal<Vec<String>>,
    tags: RwSignal<TagSelection>,
}

impl ReviewFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            links: RwSignal::new(vec![String::new()]),
            tags: RwSignal::new(TagSelection::default()),
        }
    }

    fn fill(&self, brand: &Brand) {
        self.name.set(brand.name.clone());
        self.description.set(brand.description.clone());
        self.links.set(editable_links(brand.links()));
        self.tags.set(brand.tag_ids().into_iter().collect());
    }

    fn patch(&self) -> BrandPatch {
        review_patch(
            &self.name.get_untracked(),
            &self.description.get_untracked(),
            &self.links.get_untracked(),
            &self.tags.get_untracked(),
        )
    }
}

#[component]
pub fn BrandReviewPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();
    let store = use_catalog_store();
    store_load_tags(store, ctx);
    let catalog = Signal::derive(move || store_tags(&store));

    let brand_id = StoredValue::new(id);
    let fields = ReviewFields::new();
    let (brand, set_brand) = signal(None::<Brand>);
    let (status, set_status) = signal(FetchStatus::Idle);
    let (saving, set_saving) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (message, set_message) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (unauthorized, set_unauthorized) = signal(false);

    Effect::new(move |_| {
        let Some(token) = ctx.token.get() else {
            nav.replace("/login");
            return;
        };
        let id = brand_id.get_value();
        set_status.set(FetchStatus::Loading);
        spawn_local(async move {
            match ctx.api().admin_brand(&id, &token).await {
                Ok(loaded) => {
                    fields.fill(&loaded);
                    set_brand.set(Some(loaded));
                    set_status.set(FetchStatus::Success);
                }
                Err(ApiError::Unauthorized) => set_unauthorized.set(true),
                Err(e) => {
                    log::error!("[BrandReviewPage] Failed to load {}: {}", id, e);
                    set_status.set(FetchStatus::Error(format!("Failed to fetch brand: {}", e)));
                }
            }
        });
    });

    let send_patch = move |patch: BrandPatch| {
        let Some(token) = ctx.current_token() else {
            nav.replace("/login");
            return;
        };
        let id = brand_id.get_value();
        set_saving.set(true);
        set_message.set(None);
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().patch_brand(&id, &patch, &token).await {
                Ok(updated) => {
                    log::info!("[BrandReviewPage] Updated {}", id);
                    fields.fill(&updated);
                    set_brand.set(Some(updated));
                    set_message.set(Some(UPDATE_SUCCESS.to_string()));
                }
                Err(ApiError::Unauthorized) => set_unauthorized.set(true),
                Err(e) => {
                    log::error!("[BrandReviewPage] Update of {} failed: {}", id, e);
                    set_error.set(Some(format!("Failed to update brand: {}", e)));
                }
            }
            set_saving.set(false);
        });
    };

    let delete = move || {
        let Some(token) = ctx.current_token() else {
            nav.replace("/login");
            return;
        };
        let id = brand_id.get_value();
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().delete_brand(&id, &token).await {
                Ok(()) => {
                    log::info!("[BrandReviewPage] Deleted {}", id);
                    nav.push("/dashboard");
                }
                Err(ApiError::Unauthorized) => set_unauthorized.set(true),
                Err(e) => {
                    log::error!("[BrandReviewPage] Delete of {} failed: {}", id, e);
                    set_error.set(Some(format!("Failed to delete brand: {}", e)));
                    set_deleting.set(false);
                }
            }
        });
    };

    let busy = move || saving.get() || deleting.get();
    let current_status = move || {
        brand.with(|b| b.as_ref().and_then(|b| b.status).unwrap_or(BrandStatus::Pending))
    };

    view! {
        <Show when=move || !unauthorized.get() fallback=|| view! { <NotFoundPage /> }>
            <main class="page review-page">
                <NavLink href="/dashboard" class="back-link">"← Back to Dashboard"</NavLink>
                {move || match status.get() {
                    FetchStatus::Error(msg) => view! { <p class="error-message">{msg}</p> }.into_any(),
                    FetchStatus::Success => view! {
                        <form class="review-form" on:submit=move |ev| {
                            ev.prevent_default();
                            send_patch(fields.patch());
                        }>
                            <h1>"Review Brand"</h1>
                            <p>
                                "Status: "
                                <span class=move || current_status().badge_class()>
                                    {move || current_status().as_str()}
                                </span>
                            </p>
                            <label>
                                "Name"
                                <input
                                    type="text"
                                    prop:value=move || fields.name.get()
                                    on:input=move |ev| fields.name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Description"
                                <textarea
                                    rows="5"
                                    prop:value=move || fields.description.get()
                                    on:input=move |ev| fields.description.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <h3>"Links"</h3>
                            <LinksEditor
                                links=fields.links
                                on_change={move |links: Vec<String>| fields.links.set(links)}
                                disabled=Signal::derive(busy)
                            />
                            <h3>"Tags"</h3>
                            <TagFilter
                                catalog=catalog
                                selection=fields.tags
                                on_change=move |sel: TagSelection| fields.tags.set(sel)
                                placeholder="Select tags..."
                                picker=true
                                disabled=Signal::derive(busy)
                            />
                            {move || message.get().map(|msg| view! { <p class="success-message">{msg}</p> })}
                            {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                            <div class="review-actions">
                                <button type="submit" class="primary-btn" disabled=busy>
                                    {move || if saving.get() { "Saving..." } else { "Update" }}
                                </button>
                                <button
                                    type="button"
                                    class="approve-btn"
                                    disabled=busy
                                    on:click=move |_| send_patch(BrandPatch::status(BrandStatus::Approved))
                                >
                                    "Approve"
                                </button>
                                <button
                                    type="button"
                                    class="reject-btn"
                                    disabled=busy
                                    on:click=move |_| send_patch(BrandPatch::status(BrandStatus::Rejected))
                                >
                                    "Reject"
                                </button>
                                <DeleteConfirmButton
                                    button_class="danger-btn"
                                    label="Delete"
                                    prompt="Delete this brand?"
                                    busy=Signal::derive(move || deleting.get())
                                    on_confirm=move |_| delete()
                                />
                            </div>
                        </form>
                    }.into_any(),
                    _ => view! { <p class="loading">"Loading brand..."</p> }.into_any(),
                }}
            </main>
        </Show>
    }
}
