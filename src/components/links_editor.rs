//! Links Editor Component
//!
//! Editable list of URL rows; always keeps at least one row.

use leptos::prelude::*;

use crate::submission::{add_link, remove_link, set_link};

#[component]
pub fn LinksEditor(
    #[prop(into)] links: Signal<Vec<String>>,
    #[prop(into)] on_change: Callback<Vec<String>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let edit = move |f: &dyn Fn(&mut Vec<String>)| {
        let mut next = links.get_untracked();
        f(&mut next);
        on_change.run(next);
    };

    view! {
        <div class="links-editor">
            // Rows are keyed by position so inputs keep focus while typing
            <For
                each=move || 0..links.with(|l| l.len())
                key=|i| *i
                children=move |i| {
                    view! {
                        <div class="link-row">
                            <input
                                type="url"
                                class="link-input"
                                placeholder="https://"
                                disabled=is_disabled
                                prop:value=move || links.with(|l| l.get(i).cloned().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit(&|l: &mut Vec<String>| set_link(l, i, value.clone()));
                                }
                            />
                            <Show when=move || links.with(|l| l.len() > 1)>
                                <button
                                    type="button"
                                    class="link-remove-btn"
                                    disabled=is_disabled
                                    on:click=move |_| edit(&|l: &mut Vec<String>| remove_link(l, i))
                                >
                                    "Remove"
                                </button>
                            </Show>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="link-add-btn"
                disabled=is_disabled
                on:click=move |_| edit(&add_link)
            >
                "+ Add Link"
            </button>
        </div>
    }
}
