//! Nav Link Component
//!
//! Anchor that navigates through the `Navigator` instead of reloading.

use leptos::prelude::*;

use crate::navigation::use_navigator;

/// In-app link. Modified clicks (ctrl/cmd/shift, middle button) fall
/// through to the browser.
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    /// Runs before navigating
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let target = href.clone();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                if let Some(cb) = on_navigate {
                    cb.run(());
                }
                nav.push(&target);
            }
        >
            {children()}
        </a>
    }
}
