//! UI Components for the report analyzer.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Upload form with drag & drop
//! - [`FileInfo`] - Selected file summary
//! - [`LoadingOverlay`] - Full-screen block while a report is analyzed
//! - [`NotificationStack`] - Transient error/success banners
//! - [`AnalysisModal`] - Analysis result

mod hero;
mod upload;
mod file_info;
mod loading;
mod notifications;
mod results;
mod footer;

pub use hero::*;
pub use upload::*;
pub use file_info::*;
pub use loading::*;
pub use notifications::*;
pub use results::*;
pub use footer::*;
