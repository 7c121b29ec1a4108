//! User-facing notification texts.

use crate::types::UploadError;

pub const INVALID_SELECTION: &str = "Please select a valid PDF or PNG file.";
pub const INVALID_DROP: &str = "Please drop a valid PDF or PNG file.";
pub const FILE_TOO_LARGE: &str = "File size must be less than 10MB.";
pub const NO_VALID_FILE: &str = "Please choose a valid file first.";
pub const ANALYSIS_FAILED: &str = "Failed to analyze report. Please try again.";
pub const ANALYSIS_DONE: &str = "Report analyzed successfully!";

/// How a file reached the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    /// File picker `change` event
    Picker,
    /// Drag-and-drop onto the drop-zone
    Drop,
}

impl SelectionSource {
    /// Message shown when a file from this source is rejected.
    ///
    /// The size message wins only when the type was acceptable, since
    /// validation checks the type first.
    pub fn rejection_message(&self, err: &UploadError) -> &'static str {
        match (err, self) {
            (UploadError::TooLarge { .. }, _) => FILE_TOO_LARGE,
            (_, SelectionSource::Picker) => INVALID_SELECTION,
            (_, SelectionSource::Drop) => INVALID_DROP,
        }
    }

    /// Whether the native input must be emptied after intake.
    ///
    /// Only an accepted picker selection keeps the input's value; anything
    /// else would leave a stale file there and suppress the next `change`
    /// when that file is picked again.
    pub fn resets_input(&self, accepted: bool) -> bool {
        !(accepted && *self == SelectionSource::Picker)
    }
}

/// Message for a submit that could not start or did not succeed.
pub fn submission_message(err: &UploadError) -> &'static str {
    if err.is_submission_failure() {
        ANALYSIS_FAILED
    } else {
        NO_VALID_FILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let too_large = UploadError::TooLarge { size: 15 * 1024 * 1024, limit: 10 * 1024 * 1024 };
        let bad_type = UploadError::UnsupportedType { mime_type: "text/plain".into() };

        assert_eq!(SelectionSource::Picker.rejection_message(&too_large), FILE_TOO_LARGE);
        assert_eq!(SelectionSource::Drop.rejection_message(&too_large), FILE_TOO_LARGE);
        assert_eq!(SelectionSource::Picker.rejection_message(&bad_type), INVALID_SELECTION);
        assert_eq!(SelectionSource::Drop.rejection_message(&bad_type), INVALID_DROP);
    }

    #[test]
    fn test_submission_messages() {
        assert_eq!(submission_message(&UploadError::NoFile), NO_VALID_FILE);
        assert_eq!(
            submission_message(&UploadError::UnsupportedType { mime_type: "text/plain".into() }),
            NO_VALID_FILE
        );
        assert_eq!(submission_message(&UploadError::Network("timeout".into())), ANALYSIS_FAILED);
        assert_eq!(
            submission_message(&UploadError::Server { status: 502, body: "bad gateway".into() }),
            ANALYSIS_FAILED
        );
        assert_eq!(submission_message(&UploadError::Decode("eof".into())), ANALYSIS_FAILED);
    }

    #[test]
    fn test_input_reset_after_intake() {
        assert!(!SelectionSource::Picker.resets_input(true));
        assert!(SelectionSource::Picker.resets_input(false));
        // A dropped file replaces whatever the picker held.
        assert!(SelectionSource::Drop.resets_input(true));
        assert!(SelectionSource::Drop.resets_input(false));
    }
}
