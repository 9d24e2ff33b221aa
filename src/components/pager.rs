//! Pagination Control Component

use leptos::prelude::*;

use crate::pagination::PageState;

/// Previous / numbered / Next buttons. Hidden for a single page. Every
/// request goes through `on_change`, already clamped to the valid range.
#[component]
pub fn Pagination(
    #[prop(into)] state: Signal<PageState>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            on_change.run(state.get_untracked().clamp(page));
        }
    };

    view! {
        <Show when=move || state.get().is_visible()>
            <nav class="pagination">
                <button
                    type="button"
                    class="pagination-btn"
                    disabled=move || !state.get().can_prev(loading.get())
                    on:click=move |_| go(state.get_untracked().prev())
                >
                    "Previous"
                </button>
                {move || {
                    let current = state.get();
                    current
                        .numbers()
                        .map(|n| {
                            let class = if n == current.current {
                                "pagination-btn active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    disabled=move || loading.get()
                                    on:click=move |_| go(Some(n))
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class="pagination-btn"
                    disabled=move || !state.get().can_next(loading.get())
                    on:click=move |_| go(state.get_untracked().next())
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
