//! Upload widget state.
//!
//! Holds the current selection in memory together with the browser file
//! handle. Visibility of the drop-zone and info panel, and the submit
//! button's enabled state, are all derived from it.
//!
//! ```text
//! Empty ──select ok──▶ Selected ──submit──▶ Loading ──settled──▶ Empty
//!   ▲                     │
//!   └──clear / rejected───┘
//! ```

use crate::messages::SelectionSource;
use crate::types::{FileKind, SelectedFile, UploadError, UploadResult};
use crate::validation::validate_file;

/// A validated file plus the handle used to upload it.
#[derive(Clone, Debug)]
struct Selection<H> {
    info: SelectedFile,
    kind: FileKind,
    handle: H,
}

/// State of one upload widget.
///
/// `H` is the platform file handle (`web_sys::File` in the browser).
#[derive(Clone, Debug)]
pub struct UploadState<H = web_sys::File> {
    selection: Option<Selection<H>>,
    dragging: bool,
    loading: bool,
}

impl<H> Default for UploadState<H> {
    fn default() -> Self {
        Self {
            selection: None,
            dragging: false,
            loading: false,
        }
    }
}

impl<H: Clone> UploadState<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a file. A rejected file clears any prior selection.
    pub fn select(&mut self, info: SelectedFile, handle: H) -> UploadResult<FileKind> {
        match validate_file(&info) {
            Ok(kind) => {
                self.selection = Some(Selection { info, kind, handle });
                Ok(kind)
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Handle a drop. Only the first file counts; an empty drop returns
    /// `None` and leaves the selection untouched.
    pub fn drop_files<I>(&mut self, files: I) -> Option<UploadResult<FileKind>>
    where
        I: IntoIterator<Item = (SelectedFile, H)>,
    {
        self.dragging = false;
        let (info, handle) = files.into_iter().next()?;
        Some(self.select(info, handle))
    }

    /// Apply a selection from either source and return the notification
    /// text for a rejection.
    pub fn intake(
        &mut self,
        source: SelectionSource,
        files: impl IntoIterator<Item = (SelectedFile, H)>,
    ) -> Option<Result<FileKind, &'static str>> {
        let outcome = match source {
            SelectionSource::Picker => {
                let (info, handle) = files.into_iter().next()?;
                self.select(info, handle)
            }
            SelectionSource::Drop => self.drop_files(files)?,
        };
        Some(outcome.map_err(|err| source.rejection_message(&err)))
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Start a submission, handing back the file to upload.
    ///
    /// The selection is re-validated. It stays visible until
    /// [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> UploadResult<H> {
        if self.loading {
            return Err(UploadError::AlreadySubmitting);
        }
        let selection = self.selection.as_ref().ok_or(UploadError::NoFile)?;
        if let Err(err) = validate_file(&selection.info) {
            self.clear();
            return Err(err);
        }
        let handle = selection.handle.clone();
        self.loading = true;
        Ok(handle)
    }

    /// The request settled; the selection is consumed either way.
    pub fn finish_submit(&mut self) {
        self.loading = false;
        self.clear();
    }
}

impl<H> UploadState<H> {
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selection.as_ref().map(|s| &s.info)
    }

    pub fn selected_kind(&self) -> Option<FileKind> {
        self.selection.as_ref().map(|s| s.kind)
    }

    /// Submit is enabled iff a validated file is held.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some()
    }

    pub fn shows_file_info(&self) -> bool {
        self.selection.is_some()
    }

    pub fn shows_drop_zone(&self) -> bool {
        !self.shows_file_info()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{FILE_TOO_LARGE, INVALID_DROP, INVALID_SELECTION};

    const MB: u64 = 1024 * 1024;

    fn png(size: u64) -> (SelectedFile, ()) {
        (SelectedFile::new("scan.png", size, "image/png"), ())
    }

    fn pdf(size: u64) -> (SelectedFile, ()) {
        (SelectedFile::new("labs.pdf", size, "application/pdf"), ())
    }

    fn txt() -> (SelectedFile, ()) {
        (SelectedFile::new("notes.txt", 120, "text/plain"), ())
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = UploadState::<()>::new();
        assert!(!state.can_submit());
        assert!(state.shows_drop_zone());
        assert!(!state.shows_file_info());
        assert!(!state.is_loading());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_valid_selection_enables_submit() {
        let mut state = UploadState::new();
        let outcome = state.intake(SelectionSource::Picker, [png(2 * MB)]);

        assert_eq!(outcome, Some(Ok(FileKind::Png)));
        assert!(state.can_submit());
        assert!(state.shows_file_info());
        assert!(!state.shows_drop_zone());
        assert_eq!(state.selected().map(|f| f.name.as_str()), Some("scan.png"));
        assert_eq!(state.selected_kind(), Some(FileKind::Png));
    }

    #[test]
    fn test_oversized_selection_clears_prior_file() {
        let mut state = UploadState::new();
        state.intake(SelectionSource::Picker, [png(MB)]);

        let outcome = state.intake(SelectionSource::Picker, [pdf(15 * MB)]);

        assert_eq!(outcome, Some(Err(FILE_TOO_LARGE)));
        assert!(!state.can_submit());
        assert!(state.shows_drop_zone());
    }

    #[test]
    fn test_wrong_type_message_depends_on_source() {
        let mut state = UploadState::new();
        assert_eq!(state.intake(SelectionSource::Picker, [txt()]), Some(Err(INVALID_SELECTION)));
        assert_eq!(state.intake(SelectionSource::Drop, [txt()]), Some(Err(INVALID_DROP)));
        assert!(!state.can_submit());
    }

    #[test]
    fn test_empty_picker_change_is_noop() {
        let mut state = UploadState::new();
        state.intake(SelectionSource::Picker, [pdf(MB)]);

        assert_eq!(state.intake(SelectionSource::Picker, Vec::new()), None);
        assert!(state.can_submit());
    }

    #[test]
    fn test_empty_drop_is_noop() {
        let mut state = UploadState::new();
        state.intake(SelectionSource::Picker, [pdf(MB)]);
        state.drag_over();

        assert_eq!(state.drop_files(Vec::new()), None);
        assert!(state.can_submit());
        assert_eq!(state.selected().map(|f| f.name.as_str()), Some("labs.pdf"));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_drop_uses_first_file_only() {
        let mut state = UploadState::new();
        let outcome = state.drop_files([pdf(MB), txt(), png(20 * MB)]);

        assert_eq!(outcome, Some(Ok(FileKind::Pdf)));
        assert_eq!(state.selected_kind(), Some(FileKind::Pdf));
    }

    #[test]
    fn test_drag_affordance() {
        let mut state = UploadState::<()>::new();
        state.drag_over();
        assert!(state.is_dragging());
        state.drag_leave();
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_clear_disables_submit() {
        let mut state = UploadState::new();
        state.intake(SelectionSource::Drop, [png(MB)]);
        state.clear();

        assert!(!state.can_submit());
        assert!(state.shows_drop_zone());
    }

    #[test]
    fn test_submit_without_file() {
        let mut state = UploadState::<()>::new();
        assert_eq!(state.begin_submit(), Err(UploadError::NoFile));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("labs.pdf", MB, "application/pdf"), 7u32).unwrap();

        assert_eq!(state.begin_submit(), Ok(7));
        assert!(state.is_loading());
        assert!(state.shows_file_info());
        assert_eq!(state.begin_submit(), Err(UploadError::AlreadySubmitting));

        state.finish_submit();
        assert!(!state.is_loading());
        assert!(!state.can_submit());
        assert!(state.shows_drop_zone());
    }
}
