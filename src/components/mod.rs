//! UI Components
//!
//! Reusable Leptos components.

mod brand_card;
mod brand_grid;
mod brand_modal;
mod delete_confirm_button;
mod links_editor;
mod nav_link;
mod navbar;
mod pager;
mod tag_filter;

pub use brand_card::BrandCard;
pub use brand_grid::BrandGrid;
pub use brand_modal::BrandModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use links_editor::LinksEditor;
pub use nav_link::NavLink;
pub use navbar::Navbar;
pub use pager::Pagination;
pub use tag_filter::TagFilter;
