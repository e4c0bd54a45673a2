//! Layman Law - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading legal documents and reading
//! them back simplified, as extracted clauses, or as a risk table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (links, backend status)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /              Home: Hero + FileUpload + ResultView     │
//! │  ├── /how-it-works  HowItWorks                               │
//! │  └── /about         About                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (AnalysisMode, AnalysisResult, AppError, etc.)
//! - [`flow`] - Upload state machine and submission
//! - [`services`] - Backend communication
//! - [`components`] - UI components (Navbar, FileUpload, ResultView, etc.)
//! - [`pages`] - Routed pages

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod flow;
pub mod services;
pub mod components;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Request
    AnalysisMode, RequestState, UploadSelection,
    // Results
    AnalysisResult, RiskItem, Severity, risk_class,
    // API
    BackendStatus, HealthStatus,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic/console logging and mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("⚖️ Layman Law - Starting Leptos App (backend: {})", backend_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <div class="app">
                <Navbar/>
                <main class="content">
                    <Routes>
                        <Route path=pages::HOME_PATH view=pages::Home/>
                        <Route path=pages::HOW_IT_WORKS_PATH view=pages::HowItWorks/>
                        <Route path=pages::ABOUT_PATH view=pages::About/>
                        <Route path="/*any" view=pages::NotFound/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
