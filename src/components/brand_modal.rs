//! Brand Detail Modal
//!
//! Fetches the full brand whenever `brand_id` becomes `Some`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::display::LinkKind;
use crate::fetch::RequestGate;
use crate::models::{Brand, TagRef};
use crate::pagination::FetchStatus;

#[component]
pub fn BrandModal(
    #[prop(into)] brand_id: Signal<Option<String>>,
    #[prop(into)] catalog: Signal<Vec<TagRef>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (brand, set_brand) = signal(None::<Brand>);
    let (status, set_status) = signal(FetchStatus::Idle);
    let gate = RequestGate::default();
    on_cleanup({
        let gate = gate.clone();
        move || gate.close()
    });

    Effect::new(move |_| {
        let Some(id) = brand_id.get() else {
            set_brand.set(None);
            set_status.set(FetchStatus::Idle);
            return;
        };
        let gate = gate.clone();
        let ticket = gate.begin();
        set_brand.set(None);
        set_status.set(FetchStatus::Loading);
        spawn_local(async move {
            let result = ctx.api().get_brand(&id).await;
            if !gate.is_current(ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_brand.set(Some(loaded));
                    set_status.set(FetchStatus::Success);
                }
                Err(e) => {
                    log::error!("[BrandModal] Failed to load {}: {}", id, e);
                    set_status.set(FetchStatus::Error(format!(
                        "Failed to fetch brand details: {}",
                        e
                    )));
                }
            }
        });
    });

    view! {
        <Show when=move || brand_id.with(|id| id.is_some())>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    {move || match (status.get(), brand.get()) {
                        (FetchStatus::Error(msg), _) => {
                            view! { <p class="error-message">{msg}</p> }.into_any()
                        }
                        (_, Some(b)) => view! { <BrandDetails brand=b catalog=catalog /> }.into_any(),
                        _ => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn BrandDetails(brand: Brand, catalog: Signal<Vec<TagRef>>) -> impl IntoView {
    let entries = brand.tag_entries().to_vec();
    let links = brand.links().to_vec();
    let image = (!brand.image.is_empty()).then(|| brand.image.clone());

    view! {
        <div class="brand-details">
            {image.map(|src| view! { <img class="brand-details-image" src=src alt="" /> })}
            <h2>{brand.name.clone()}</h2>
            <p class="brand-details-description">{brand.description.clone()}</p>
            <div class="brand-details-tags">
                {move || {
                    catalog.with(|c| {
                        entries
                            .iter()
                            .map(|entry| view! { <span class="tag-pill">{entry.label(c).to_string()}</span> })
                            .collect_view()
                    })
                }}
            </div>
            <div class="brand-details-links">
                {links
                    .into_iter()
                    .map(|url| {
                        let kind = LinkKind::classify(&url);
                        view! {
                            <a class=kind.css_class() href=url target="_blank" rel="noopener noreferrer" title=kind.label()>
                                {kind.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
