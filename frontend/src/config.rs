//! Application configuration.
//!
//! Centralized configuration for the upload widget. Everything here is
//! compile-time; the widget has no environment or persisted settings.

use crate::types::ResponseFormat;

/// Application name, used for the page title.
pub const APP_NAME: &str = "Report Analyzer";

/// Upload endpoint.
///
/// Relative to the page origin: the bundle is served by the same server
/// that analyzes the report.
pub const UPLOAD_ENDPOINT: &str = "/";

/// Multipart field name carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// How the endpoint answers a successful upload.
pub const RESPONSE_FORMAT: ResponseFormat = ResponseFormat::Json;

/// Maximum file size for upload (in bytes).
///
/// 10 MiB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types accepted by validation. Matched exactly.
pub const ALLOWED_MIME_TYPES: [&str; 2] = ["application/pdf", "image/png"];

/// `accept` attribute of the file input (picker filter only, not validation).
pub const FILE_INPUT_ACCEPT: &str = ".pdf,.png,application/pdf,image/png";

/// Delay before a new notification slides in.
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;

/// Time from insertion until a notification starts sliding out.
pub const NOTIFICATION_DISMISS_AFTER_MS: u32 = 4000;

/// Time between sliding out and removal from the document.
pub const NOTIFICATION_REMOVE_DELAY_MS: u32 = 300;
