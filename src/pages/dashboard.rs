//! Dashboard Page
//!
//! Moderation table over every brand. Requires the session token; a 401
//! from the API shows the not-found view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NavLink;
use crate::context::use_app_context;
use crate::dashboard::{apply_status, remove_row, DashboardAction, RowBusy, ACTION_OPTIONS};
use crate::error::ApiError;
use crate::models::{Brand, BrandPatch, BrandStatus};
use crate::navigation::use_navigator;
use crate::pages::NotFoundPage;
use crate::pagination::FetchStatus;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();

    let (rows, set_rows) = signal(Vec::<Brand>::new());
    let (status, set_status) = signal(FetchStatus::Idle);
    let busy = RwSignal::new(RowBusy::default());
    let (status_error, set_status_error) = signal(None::<String>);
    let (delete_error, set_delete_error) = signal(None::<String>);
    let (unauthorized, set_unauthorized) = signal(false);

    Effect::new(move |_| {
        let Some(token) = ctx.token.get() else {
            log::info!("[DashboardPage] No session, redirecting to login");
            nav.replace("/login");
            return;
        };
        set_status.set(FetchStatus::Loading);
        spawn_local(async move {
            match ctx.api().dashboard_brands(&token).await {
                Ok(list) => {
                    log::debug!("[DashboardPage] Loaded {} brands", list.len());
                    set_rows.set(list);
                    set_status.set(FetchStatus::Success);
                }
                Err(ApiError::Unauthorized) => set_unauthorized.set(true),
                Err(e) => {
                    log::error!("[DashboardPage] Failed to load brands: {}", e);
                    set_status.set(FetchStatus::Error(format!("Failed to fetch brands: {}", e)));
                }
            }
        });
    });

    let change_status = move |id: String, next: BrandStatus| {
        let Some(token) = ctx.current_token() else {
            nav.replace("/login");
            return;
        };
        busy.update(|b| b.saving = Some(id.clone()));
        set_status_error.set(None);
        spawn_local(async move {
            match ctx.api().patch_brand(&id, &BrandPatch::status(next), &token).await {
                Ok(updated) => set_rows.update(|r| apply_status(r, &id, updated.status)),
                Err(ApiError::Unauthorized) => set_unauthorized.set(true),
                Err(e) => {
                    log::error!("[DashboardPage] Status change for {} failed: {}", id, e);
                    set_status_error.set(Some(format!("Failed to update status: {}", e)));
                }
            }
            busy.update(|b| b.saving = None);
        });
    };

    let delete = move |id: String| {
        let Some(token) = ctx.current_token() else {
            nav.replace("/login");
            return;
        };
        busy.update(|b| b.deleting = Some(id.clone()));
        set_delete_error.set(None);
        spawn_local(async move {
            match ctx.api().delete_brand(&id, &token).await {
                Ok(()) => {
                    log::info!("[DashboardPage] Deleted {}", id);
                    set_rows.update(|r| remove_row(r, &id));
                }
                Err(ApiError::Unauthorized) => set_unauthorized.set(true),
                Err(e) => {
                    log::error!("[DashboardPage] Delete of {} failed: {}", id, e);
                    set_delete_error.set(Some(format!("Failed to delete brand: {}", e)));
                }
            }
            busy.update(|b| b.deleting = None);
        });
    };

    let on_action = move |id: String, value: String| match DashboardAction::parse(&value) {
        Some(DashboardAction::SetStatus(next)) => change_status(id, next),
        Some(DashboardAction::Delete) => delete(id),
        None => {}
    };

    view! {
        <Show when=move || !unauthorized.get() fallback=|| view! { <NotFoundPage /> }>
            <main class="page dashboard-page">
                <NavLink href="/" class="back-link">"← Back to Home"</NavLink>
                <h1>"Brands Pending Approval"</h1>
                {move || status_error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                {move || delete_error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                {move || match status.get() {
                    FetchStatus::Error(msg) => view! { <p class="error-message">{msg}</p> }.into_any(),
                    FetchStatus::Loading | FetchStatus::Idle => {
                        view! { <p class="loading">"Loading brands..."</p> }.into_any()
                    }
                    FetchStatus::Success if rows.with(|r| r.is_empty()) => {
                        view! { <p class="empty-message">"No brands found."</p> }.into_any()
                    }
                    FetchStatus::Success => view! {
                        <table class="dashboard-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || rows.get()
                                    key=|brand| (brand.id.clone(), brand.status)
                                    children=move |brand| {
                                        view! { <DashboardRow brand=brand busy=busy on_action=on_action /> }
                                    }
                                />
                            </tbody>
                        </table>
                    }.into_any(),
                }}
            </main>
        </Show>
    }
}

#[component]
fn DashboardRow(
    brand: Brand,
    busy: RwSignal<RowBusy>,
    on_action: impl Fn(String, String) + Copy + 'static,
) -> impl IntoView {
    let id = StoredValue::new(brand.id.clone());
    let status = brand.status.unwrap_or(BrandStatus::Pending);
    let row_busy = move || busy.with(|b| id.with_value(|id| b.is_busy(id)));

    view! {
        <tr>
            <td>
                <NavLink href=format!("/dashboard/{}", brand.id)>{brand.name.clone()}</NavLink>
            </td>
            <td>
                <span class=status.badge_class()>{status.as_str()}</span>
            </td>
            <td>
                <select
                    class="action-select"
                    disabled=row_busy
                    prop:value=move || {
                        busy.track();
                        String::new()
                    }
                    on:change=move |ev| on_action(id.get_value(), event_target_value(&ev))
                >
                    <option value="">"Select action"</option>
                    {ACTION_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                {move || {
                    busy.with(|b| {
                        id.with_value(|id| {
                            if b.is_saving(id) {
                                Some(view! { <span class="row-busy">"Saving..."</span> })
                            } else if b.is_deleting(id) {
                                Some(view! { <span class="row-busy">"Deleting..."</span> })
                            } else {
                                None
                            }
                        })
                    })
                }}
            </td>
        </tr>
    }
}
