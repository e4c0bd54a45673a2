//! Backend services.
//!
//! # Services
//!
//! - [`analysis`] - document upload to the analysis backend and
//!   interpretation of its JSON replies, plus the `/health` probe

pub mod analysis;

pub use analysis::*;
