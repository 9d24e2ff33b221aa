//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NavLink;
use crate::context::use_app_context;
use crate::navigation::use_navigator;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let nav = use_navigator();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().login(&user, &pass).await {
                Ok(token) => {
                    log::info!("[LoginPage] Logged in as {}", user);
                    ctx.set_token(token);
                    nav.push("/dashboard");
                }
                Err(e) => {
                    log::warn!("[LoginPage] Login for {} failed: {}", user, e);
                    set_error.set(Some(LOGIN_FAILED.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <main class="page login-page">
            <NavLink href="/" class="back-link">"← Back to Home"</NavLink>
            <form class="login-form" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </main>
    }
}
