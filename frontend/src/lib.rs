//! Report Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload widget: pick or drop a PDF/PNG report, send it
//! to the analysis endpoint and read the returned explanation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (meta context, stylesheets, Notifier context)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection                                          │
//! │  │   ├── drop-zone + file input                             │
//! │  │   ├── FileInfo                                           │
//! │  │   └── LoadingOverlay                                     │
//! │  └── AnalysisModal (when a result arrived)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotificationStack                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, AnalysisResult, UploadError, etc.)
//! - [`validation`] - File validation and size formatting
//! - [`state`] - Upload widget state machine
//! - [`components`] - UI components
//! - [`services`] - Upload endpoint and notifications

use leptos::*;
use leptos_meta::{provide_meta_context, Style, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod messages;
pub mod validation;
pub mod state;
pub mod styles;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    SelectedFile, FileKind,
    // API
    AnalysisResponse, AnalysisResult, ResponseFormat,
    // Notifications
    Notification, NotificationKind, NotificationPhase,
    // Errors
    UploadError, UploadResult,
};

// Logic
pub use state::UploadState;
pub use validation::{format_file_size, validate_file};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and logger, then mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Report Analyzer - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Notifier::provide();

    view! {
        <Title text=APP_NAME/>
        <Style id="upload-styles">{styles::UPLOAD_CSS}</Style>
        <Style id="notification-styles">{styles::NOTIFICATION_CSS}</Style>
        <Style id="results-styles">{styles::RESULTS_CSS}</Style>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>

        <NotificationStack/>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (analysis, set_analysis) = create_signal(None::<AnalysisResult>);

    view! {
        <div class="container">
            <Hero/>
            <UploadSection on_analysis=move |result: AnalysisResult| set_analysis.set(Some(result))/>
        </div>

        <Footer/>

        {move || analysis.get().map(|result| view! {
            <AnalysisModal result=result on_close=move |_: ()| set_analysis.set(None)/>
        })}
    }
}
