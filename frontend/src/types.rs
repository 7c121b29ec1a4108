//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - the user's selection and its validated kind
//! - **API Types** - upload response structures
//! - **Notification Types** - transient banners
//! - **Error Types** - frontend error handling

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Metadata of the file the user picked or dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

impl From<&web_sys::File> for SelectedFile {
    fn from(file: &web_sys::File) -> Self {
        // Blob sizes are integral doubles.
        Self::new(file.name(), file.size().max(0.0) as u64, file.type_())
    }
}

/// Kind of an accepted file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// `application/pdf`
    Pdf,
    /// `image/png`
    Png,
}

impl FileKind {
    /// Map an exact MIME type to a kind.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type {
            "application/pdf" => Some(FileKind::Pdf),
            "image/png" => Some(FileKind::Png),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::Png => "image/png",
        }
    }

    /// Short label for the info panel.
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF document",
            FileKind::Png => "PNG image",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Png => "🖼️",
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Contract of a successful response from the upload endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFormat {
    /// JSON body `{ "analysis": "<text>" }`
    Json,
    /// The whole body is the analysis text
    PlainText,
}

/// JSON body returned by the upload endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisResponse {
    /// Free-text analysis of the report
    pub analysis: String,
}

/// Analysis ready to be displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    /// Analysis text, verbatim
    pub text: String,
    /// Local time the response arrived (HH:MM:SS)
    pub received_at: String,
}

impl AnalysisResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            received_at: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    /// Text split on newlines, one entry per rendered line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Notification flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

impl NotificationKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Error => "error-message",
            NotificationKind::Success => "success-message",
        }
    }
}

/// Where a banner is in its slide-in / slide-out lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted, still off-screen
    Entering,
    /// Slid in
    Visible,
    /// Sliding out, about to be removed
    Leaving,
}

impl NotificationPhase {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationPhase::Entering => "entering",
            NotificationPhase::Visible => "visible",
            NotificationPhase::Leaving => "leaving",
        }
    }
}

/// A single transient banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
}

impl Notification {
    /// Full class attribute for the banner element.
    pub fn class_attr(&self) -> String {
        format!(
            "notification {} {}",
            self.kind.css_class(),
            self.phase.css_class()
        )
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend errors.
///
/// Unified error type for selection, validation and submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Nothing selected when submitting.
    #[error("no file selected")]
    NoFile,

    /// MIME type outside the allowed set.
    #[error("unsupported file type '{mime_type}'")]
    UnsupportedType { mime_type: String },

    /// File larger than the limit.
    #[error("file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    /// A submission is still in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// Could not build the multipart body.
    #[error("failed to build form data: {0}")]
    FormData(String),

    /// Network/HTTP error.
    #[error("request failed: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Success status with a body that does not match the contract.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl UploadError {
    /// Whether the error comes from the submission round-trip rather than
    /// from the local selection.
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            UploadError::FormData(_)
                | UploadError::Network(_)
                | UploadError::Server { .. }
                | UploadError::Decode(_)
        )
    }
}

/// Result type alias for frontend operations.
pub type UploadResult<T> = Result<T, UploadError>;
