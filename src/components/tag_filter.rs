//! Tag Filter Component
//!
//! Multi-select over the tag catalog: pills for the current selection and a
//! dropdown of the remaining tags. Used both as the brand-list filter and as
//! the tag picker of the submission and review forms.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::filter::{selected_options, selection_label, unselected_options};
use crate::models::TagRef;
use crate::query::TagSelection;

pub const FILTER_PLACEHOLDER: &str = "Filter by tags...";

#[component]
pub fn TagFilter(
    #[prop(into)] catalog: Signal<Vec<TagRef>>,
    #[prop(into)] selection: Signal<TagSelection>,
    #[prop(into)] on_change: Callback<TagSelection>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Dropdown visibility, for parents that need to observe it
    #[prop(optional)]
    open: Option<RwSignal<bool>>,
    /// Picker mode: close after each pick and hide the Clear button
    #[prop(optional)]
    picker: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let open = open.unwrap_or_else(|| RwSignal::new(false));
    let placeholder = placeholder.unwrap_or_else(|| FILTER_PLACEHOLDER.to_string());
    let root = NodeRef::<leptos::html::Div>::new();

    // Close on clicks outside the component
    let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
        if !open.try_get_untracked().unwrap_or(false) {
            return;
        }
        let Some(el) = root.try_get_untracked().flatten() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !el.contains(target.as_ref()) {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let is_disabled = move || disabled.get().unwrap_or(false);
    let chosen = move || catalog.with(|c| selection.with(|s| selected_options(c, s)));
    let remaining = move || catalog.with(|c| selection.with(|s| unselected_options(c, s)));
    let label = move || selection.with(|s| selection_label(s, &placeholder));

    let pick = move |id: String| {
        let next = selection.with_untracked(|s| s.with(&id));
        on_change.run(next);
        if picker {
            open.set(false);
        }
    };
    let unpick = move |id: String| {
        let next = selection.with_untracked(|s| s.without(&id));
        on_change.run(next);
    };

    view! {
        <div class="tag-filter" node_ref=root>
            <div class="tag-pills">
                <For
                    each=chosen
                    key=|tag| tag.id.clone()
                    children=move |tag| {
                        let id = tag.id.clone();
                        view! {
                            <span class="tag-pill">
                                {tag.name.clone()}
                                <button
                                    type="button"
                                    class="tag-pill-remove"
                                    aria-label="Remove tag"
                                    disabled=is_disabled
                                    on:click=move |_| unpick(id.clone())
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
                <Show when=move || !picker && selection.with(|s| !s.is_empty())>
                    <button
                        type="button"
                        class="tag-clear-btn"
                        disabled=is_disabled
                        on:click=move |_| on_change.run(TagSelection::default())
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
            <button
                type="button"
                class="tag-dropdown-toggle"
                disabled=is_disabled
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {label}
                <span class="tag-dropdown-caret">{move || if open.get() { "▲" } else { "▼" }}</span>
            </button>
            <Show when=move || open.get()>
                <div class="tag-dropdown">
                    {move || {
                        let options = remaining();
                        if catalog.with(|c| c.is_empty()) {
                            view! { <div class="tag-dropdown-empty">"No tags available"</div> }.into_any()
                        } else if options.is_empty() {
                            view! { <div class="tag-dropdown-empty">"All tags selected"</div> }.into_any()
                        } else {
                            options
                                .into_iter()
                                .map(|tag| {
                                    let id = tag.id.clone();
                                    view! {
                                        <div class="tag-dropdown-option" on:click=move |_| pick(id.clone())>
                                            {tag.name}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
