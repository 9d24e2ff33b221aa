//! Brand Card Component

use leptos::prelude::*;

use crate::display::{
    contrast_text_color, hidden_tag_count, truncate_description, CARD_TAG_LIMIT,
    DEFAULT_CARD_COLOR,
};
use crate::models::{Brand, TagRef};

/// Grid tile. Clicking anywhere opens the detail modal.
#[component]
pub fn BrandCard(
    brand: Brand,
    #[prop(into)] catalog: Signal<Vec<TagRef>>,
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    let background = brand
        .primary_color
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CARD_COLOR.to_string());
    let style = format!(
        "background-color: {}; color: {};",
        background,
        contrast_text_color(&background)
    );
    let description = truncate_description(&brand.description);
    let hidden = hidden_tag_count(brand.tag_entries().len());
    let entries: Vec<_> = brand.tag_entries().iter().take(CARD_TAG_LIMIT).cloned().collect();
    let id = brand.id.clone();
    let image = (!brand.image.is_empty()).then(|| brand.image.clone());

    view! {
        <div class="brand-card" style=style on:click=move |_| on_open.run(id.clone())>
            {image.map(|src| view! { <img class="brand-card-image" src=src alt="" /> })}
            <h3 class="brand-card-name">{brand.name.clone()}</h3>
            <p class="brand-card-description">{description}</p>
            <div class="brand-card-tags">
                {move || {
                    catalog.with(|c| {
                        entries
                            .iter()
                            .map(|entry| {
                                view! { <span class="tag-pill">{entry.label(c).to_string()}</span> }
                            })
                            .collect_view()
                    })
                }}
                {hidden.map(|n| view! { <span class="tag-pill more">{format!("+{} more", n)}</span> })}
            </div>
        </div>
    }
}
