//! UI Components for the Layman Law application.
//!
//! # Layout Components
//! - [`Navbar`] - Navigation links and backend status badge
//! - [`Hero`] - Upload card heading
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`FileUpload`] - File picker, mode selector and submission
//! - [`ResultView`] - Text result or [`RiskTable`]

mod navbar;
mod hero;
mod upload;
mod result;
mod footer;

pub use navbar::*;
pub use hero::*;
pub use upload::*;
pub use result::*;
pub use footer::*;
