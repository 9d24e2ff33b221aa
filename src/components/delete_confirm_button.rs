//! Delete Confirm Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, asks `prompt` with Yes/No buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `busy` - Disables every button and swaps the label while a delete runs
/// * `on_confirm` - Callback to execute when the user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                disabled=move || busy.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {
                    let label = label.clone();
                    move || if busy.get() { "Deleting...".to_string() } else { label.clone() }
                }
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
