//! Pages
//!
//! One component per route.

mod brand_review;
mod dashboard;
pub(crate) mod home;
mod login;
mod not_found;
mod search;
mod submit;

pub use brand_review::BrandReviewPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use search::SearchPage;
pub use submit::SubmitPage;
