//! Not Found Page

use leptos::prelude::*;

use crate::components::NavLink;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page not-found-page">
            <h1>"404 | Page Not Found"</h1>
            <NavLink href="/" class="back-link">"← Back to Home"</NavLink>
        </main>
    }
}
