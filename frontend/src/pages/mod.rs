//! Routed pages.
//!
//! - [`Home`] - `/`, the upload card
//! - [`HowItWorks`] - `/how-it-works`
//! - [`About`] - `/about`
//! - [`NotFound`] - any other path

mod home;
mod how_it_works;
mod about;
mod not_found;

pub use home::*;
pub use how_it_works::*;
pub use about::*;
pub use not_found::*;

use crate::APP_NAME;

pub const HOME_PATH: &str = "/";
pub const HOW_IT_WORKS_PATH: &str = "/how-it-works";
pub const ABOUT_PATH: &str = "/about";

/// Document title for a page.
pub fn page_title(page: &str) -> String {
    format!("{} · {}", page, APP_NAME)
}
