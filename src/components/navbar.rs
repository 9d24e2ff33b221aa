//! Navbar Component
//!
//! Logo, site links and a toggleable search bar. The query text is owned by
//! the parent; Enter jumps to the full search page.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::navigation::use_navigator;
use crate::query::{ViewState, SEARCH_PARAM};

#[component]
pub fn Navbar(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_query: Callback<String>,
) -> impl IntoView {
    let nav = use_navigator();
    let (search_open, set_search_open) = signal(false);

    let close_search = move || {
        set_search_open.set(false);
        on_query.run(String::new());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let text = query.get_untracked();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        log::debug!("[Navbar] Searching for {:?}", trimmed);
        nav.push(&ViewState::default().with_query(trimmed).href("/search", SEARCH_PARAM));
    };

    view! {
        <header class="navbar">
            <NavLink href="/" class="navbar-logo" on_navigate=Callback::new(move |_| close_search())>
                "Brand Catalog"
            </NavLink>
            <nav class="navbar-links">
                <NavLink href="/">"Home"</NavLink>
                <NavLink href="/submit">"Submit a Brand"</NavLink>
                <NavLink href="/dashboard">"Admin"</NavLink>
            </nav>
            <div class="navbar-search">
                <Show
                    when=move || search_open.get()
                    fallback=move || view! {
                        <button
                            type="button"
                            class="navbar-search-toggle"
                            aria-label="Open search"
                            on:click=move |_| {
                                on_query.run(String::new());
                                set_search_open.set(true);
                            }
                        >
                            "🔍"
                        </button>
                    }
                >
                    <input
                        type="text"
                        class="navbar-search-input"
                        placeholder="Search brands..."
                        autofocus
                        prop:value=move || query.get()
                        on:input=move |ev| on_query.run(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        type="button"
                        class="navbar-search-close"
                        aria-label="Close search"
                        on:click=move |_| close_search()
                    >
                        "×"
                    </button>
                </Show>
            </div>
        </header>
    }
}
