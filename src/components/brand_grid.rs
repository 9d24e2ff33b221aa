//! Brand Grid Component

use leptos::prelude::*;

use crate::components::BrandCard;
use crate::models::{Brand, TagRef};

/// What the grid area shows
#[derive(Debug, Clone, PartialEq, Eq)]
enum GridState {
    Error(String),
    Loading,
    Empty,
    Cards,
}

impl GridState {
    /// An error wins; a pending request hides the empty line
    fn of(error: Option<String>, loading: bool, is_empty: bool) -> Self {
        match error {
            Some(msg) => GridState::Error(msg),
            None if is_empty && loading => GridState::Loading,
            None if is_empty => GridState::Empty,
            None => GridState::Cards,
        }
    }
}

/// Cards for `brands`, or the loading / error / empty line
#[component]
pub fn BrandGrid(
    #[prop(into)] brands: Signal<Vec<Brand>>,
    #[prop(into)] catalog: Signal<Vec<TagRef>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] empty_message: Signal<String>,
    /// Defaults to "Loading brands..."
    #[prop(optional, into)]
    loading_message: MaybeProp<String>,
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    view! {
        {move || match GridState::of(error.get(), loading.get(), brands.with(|b| b.is_empty())) {
            GridState::Error(msg) => view! { <p class="error-message">{msg}</p> }.into_any(),
            GridState::Loading => {
                let msg = loading_message.get().unwrap_or_else(|| "Loading brands...".to_string());
                view! { <p class="loading">{msg}</p> }.into_any()
            }
            GridState::Empty => view! { <p class="empty-message">{empty_message.get()}</p> }.into_any(),
            GridState::Cards => view! {
                <div class="brand-grid">
                    <For
                        each=move || brands.get()
                        key=|brand| brand.id.clone()
                        children=move |brand| {
                            view! { <BrandCard brand=brand catalog=catalog on_open=on_open /> }
                        }
                    />
                </div>
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_search_hides_empty_message() {
        assert_eq!(GridState::of(None, true, true), GridState::Loading);
        assert_eq!(GridState::of(None, false, true), GridState::Empty);
    }

    #[test]
    fn test_cards_stay_visible_while_refreshing() {
        assert_eq!(GridState::of(None, true, false), GridState::Cards);
        assert_eq!(
            GridState::of(Some("boom".into()), true, false),
            GridState::Error("boom".into())
        );
    }
}
