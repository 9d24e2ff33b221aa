//! Submit Page
//!
//! Four-step brand submission wizard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{LinksEditor, NavLink, TagFilter};
use crate::context::use_app_context;
use crate::filter::selected_options;
use crate::models::TagRef;
use crate::query::TagSelection;
use crate::store::{store_load_tags, store_tags, use_catalog_store};
use crate::submission::{SubmissionForm, TOTAL_STEPS};

const SUBMIT_SUCCESS: &str = "Brand submitted successfully! It will appear once approved.";

/// Whether a key event came from a `<textarea>`
fn from_textarea(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.tag_name().eq_ignore_ascii_case("textarea"))
        .unwrap_or(false)
}

#[component]
pub fn SubmitPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    store_load_tags(store, ctx);
    let catalog = Signal::derive(move || store_tags(&store));

    let form = RwSignal::new(SubmissionForm::default());
    let dropdown_open = RwSignal::new(false);
    let (loading, set_loading) = signal(false);
    let (success, set_success) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (cancelled, set_cancelled) = signal(false);

    let step = Memo::new(move |_| form.with(|f| f.step));
    let step_valid = Memo::new(move |_| form.with(|f| f.step_is_valid()));

    let submit = move || {
        if loading.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        set_loading.set(true);
        set_success.set(None);
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().submit_brand(&snapshot).await {
                Ok(()) => {
                    log::info!("[SubmitPage] Submitted {:?}", snapshot.name);
                    form.update(|f| f.clear_fields());
                    set_success.set(Some(SUBMIT_SUCCESS.to_string()));
                }
                Err(e) => {
                    log::error!("[SubmitPage] Submission failed: {}", e);
                    set_error.set(Some(format!("Failed to submit brand: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" || from_textarea(&ev) {
            return;
        }
        if form.with_untracked(|f| f.is_last_step()) {
            // Native submit
            return;
        }
        ev.prevent_default();
        let open = dropdown_open.get_untracked();
        form.update(|f| {
            f.advance_on_enter(false, open);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.is_last_step()) {
            submit();
        }
    };

    let reset_all = move |_| {
        form.set(SubmissionForm::default());
        dropdown_open.set(false);
        set_success.set(None);
        set_error.set(None);
    };

    view! {
        <main class="page submit-page">
            <NavLink href="/" class="back-link">"← Back to Home"</NavLink>
            <Show
                when=move || !cancelled.get()
                fallback=move || view! {
                    <div class="submit-cancelled">
                        <h2>"Upload Cancelled"</h2>
                        <p>"Your brand was not submitted."</p>
                        <button type="button" class="primary-btn" on:click=move |_| set_cancelled.set(false)>
                            "Go back to form"
                        </button>
                    </div>
                }
            >
                <form class="submit-form" on:submit=on_submit on:keydown=on_keydown>
                    <div class="submit-progress">
                        {move || format!("Step {} of {}", step.get(), TOTAL_STEPS)}
                    </div>
                    <h1>{move || form.with(|f| f.title())}</h1>

                    {move || match step.get() {
                        1 => view! {
                            <label>
                                "Brand Name"
                                <input
                                    type="text"
                                    required
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.name = value);
                                    }
                                />
                            </label>
                        }.into_any(),
                        2 => view! {
                            <label>
                                "Description"
                                <textarea
                                    rows="5"
                                    required
                                    prop:value=move || form.with(|f| f.description.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.description = value);
                                    }
                                ></textarea>
                            </label>
                        }.into_any(),
                        3 => view! {
                            <div class="submit-links">
                                <h3>"Links"</h3>
                                <LinksEditor
                                    links=Signal::derive(move || form.with(|f| f.links.clone()))
                                    on_change={move |links: Vec<String>| form.update(|f| f.links = links)}
                                />
                                <h3>"Tags"</h3>
                                <TagFilter
                                    catalog=catalog
                                    selection=Signal::derive(move || form.with(|f| f.tags.clone()))
                                    on_change=move |sel: TagSelection| form.update(|f| f.tags = sel)
                                    placeholder="Select tags..."
                                    open=dropdown_open
                                    picker=true
                                />
                            </div>
                        }.into_any(),
                        _ => view! { <SubmissionSummary form=form catalog=catalog /> }.into_any(),
                    }}

                    {move || success.get().map(|msg| view! { <p class="success-message">{msg}</p> })}
                    {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}

                    <div class="submit-actions">
                        <Show when=move || { step.get() > 1 }>
                            <button
                                type="button"
                                class="secondary-btn"
                                disabled=move || loading.get()
                                on:click=move |_| form.update(|f| f.prev_step())
                            >
                                "Previous"
                            </button>
                        </Show>
                        <Show
                            when=move || { step.get() < TOTAL_STEPS }
                            fallback=move || view! {
                                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                                    {move || if loading.get() { "Submitting..." } else { "Submit" }}
                                </button>
                            }
                        >
                            <button
                                type="button"
                                class="primary-btn"
                                disabled=move || !step_valid.get()
                                on:click=move |_| form.update(|f| f.next_step())
                            >
                                "Next"
                            </button>
                        </Show>
                        <button type="button" class="secondary-btn" on:click=reset_all>
                            "Reset All"
                        </button>
                        <button
                            type="button"
                            class="danger-btn"
                            on:click=move |_| set_cancelled.set(true)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </main>
    }
}

/// Read-only recap shown on the last step
#[component]
fn SubmissionSummary(form: RwSignal<SubmissionForm>, catalog: Signal<Vec<TagRef>>) -> impl IntoView {
    let tag_names = move || {
        catalog.with(|c| {
            form.with(|f| {
                selected_options(c, &f.tags)
                    .into_iter()
                    .map(|t| t.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
        })
    };
    let links = move || {
        form.with(|f| {
            f.links
                .iter()
                .filter(|l| !l.is_empty())
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <dl class="submit-summary">
            <dt>"Name"</dt>
            <dd>{move || form.with(|f| f.name.clone())}</dd>
            <dt>"Description"</dt>
            <dd>{move || form.with(|f| f.description.clone())}</dd>
            <dt>"Links"</dt>
            <dd>
                <ul>
                    {move || links().into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
                </ul>
            </dd>
            <dt>"Tags"</dt>
            <dd>{tag_names}</dd>
        </dl>
    }
}
