//! File validation and size formatting.

use crate::config::{ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
use crate::types::{FileKind, SelectedFile, UploadError, UploadResult};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Check a file against the accepted types and the size limit.
///
/// The type is checked first: a disallowed, oversized file reports
/// `UnsupportedType`.
pub fn validate_file(file: &SelectedFile) -> UploadResult<FileKind> {
    let kind = FileKind::from_mime(&file.mime_type)
        .filter(|kind| ALLOWED_MIME_TYPES.contains(&kind.mime_type()))
        .ok_or_else(|| UploadError::UnsupportedType {
            mime_type: file.mime_type.clone(),
        })?;

    if file.size > MAX_FILE_SIZE {
        return Err(UploadError::TooLarge {
            size: file.size,
            limit: MAX_FILE_SIZE,
        });
    }

    Ok(kind)
}

/// Human-readable size in 1024-based units, at most two decimals.
///
/// `0` is rendered as `"0 Bytes"`; anything past GB stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}
