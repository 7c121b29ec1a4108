//! Report upload form with drag & drop support.
//!
//! Handles file selection, validation feedback, submission to the
//! analysis endpoint and hand-off of the result.

use leptos::html::Input;
use leptos::*;
use web_sys::{
    DragEvent, Event, EventTarget, File, FileList, HtmlInputElement, MouseEvent, SubmitEvent,
};

use crate::components::{FileInfo, LoadingOverlay};
use crate::messages::{submission_message, SelectionSource, ANALYSIS_DONE};
use crate::services::{upload_report, Notifier};
use crate::state::UploadState;
use crate::types::{AnalysisResult, SelectedFile, UploadError};
use crate::validation::format_file_size;
use crate::{FILE_INPUT_ACCEPT, RESPONSE_FORMAT, UPLOAD_ENDPOINT, UPLOAD_FIELD};

#[component]
pub fn UploadSection(
    /// Called with the analysis once the server answered.
    #[prop(into)]
    on_analysis: Callback<AnalysisResult>,
) -> impl IntoView {
    let notifier = Notifier::use_notifier();
    let state = create_rw_signal(UploadState::<File>::new());
    let file_input = create_node_ref::<Input>();

    // Selection from the picker or a drop
    let intake = move |source: SelectionSource, files: Vec<(SelectedFile, File)>| {
        let Some(outcome) = state.try_update(|s| s.intake(source, files)).flatten() else {
            return;
        };
        if source.resets_input(outcome.is_ok()) {
            reset_input(file_input);
        }
        match outcome {
            Ok(kind) => {
                if let Some(file) = state.with_untracked(|s| s.selected().cloned()) {
                    log::info!(
                        "📎 Selected {} ({}, {})",
                        file.name,
                        kind.label(),
                        format_file_size(file.size)
                    );
                }
            }
            Err(message) => notifier.error(message),
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        intake(SelectionSource::Picker, file_entries(input.files()));
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_over());
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = ev.data_transfer().and_then(|dt| dt.files());
        intake(SelectionSource::Drop, file_entries(files));
    };

    // Clicking the drop-zone opens the picker, unless the click is the
    // picker's own (re-dispatched) click.
    let on_area_click = move |ev: MouseEvent| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        if !is_target(ev.target(), &input) {
            input.click();
        }
    };

    let on_remove = move |_: ()| {
        state.update(|s| s.clear());
        reset_input(file_input);
        log::info!("🗑️ Selection cleared");
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let file = match state.try_update(|s| s.begin_submit()) {
            Some(Ok(file)) => file,
            Some(Err(UploadError::AlreadySubmitting)) => {
                log::warn!("⏳ Submission already in progress");
                return;
            }
            Some(Err(err)) => {
                log::warn!("Submit refused: {}", err);
                reset_input(file_input);
                notifier.error(submission_message(&err));
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = upload_report(&file, UPLOAD_ENDPOINT, RESPONSE_FORMAT).await;

            state.update(|s| s.finish_submit());
            reset_input(file_input);

            match outcome {
                Ok(result) => {
                    notifier.success(ANALYSIS_DONE);
                    on_analysis.call(result);
                }
                Err(err) => {
                    log::error!("❌ Upload failed: {}", err);
                    notifier.error(submission_message(&err));
                }
            }
        });
    };

    view! {
        <form id="uploadForm" class="upload-form" on:submit=on_submit>
            <div
                id="fileUploadArea"
                class="file-upload-area"
                class:dragover=move || state.with(|s| s.is_dragging())
                style:display=move || if state.with(|s| s.shows_drop_zone()) { "block" } else { "none" }
                on:click=on_area_click
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drag and drop your report here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint">"PDF or PNG, up to 10MB"</div>
                <input
                    type="file"
                    id="fileInput"
                    name=UPLOAD_FIELD
                    accept=FILE_INPUT_ACCEPT
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>

            <FileInfo
                file=Signal::derive(move || state.with(|s| s.selected().cloned()))
                kind=Signal::derive(move || state.with(|s| s.selected_kind()))
                on_remove=on_remove
            />

            <button
                type="submit"
                id="submitBtn"
                class="submit-btn"
                disabled=move || !state.with(|s| s.can_submit())
            >
                "Analyze Report"
            </button>
        </form>

        <LoadingOverlay visible=Signal::derive(move || state.with(|s| s.is_loading()))/>
    }
}

/// Pair each browser file with its metadata, in list order.
fn file_entries(files: Option<FileList>) -> Vec<(SelectedFile, File)> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| (SelectedFile::from(&file), file))
        .collect()
}

/// Reset the native input so re-picking the same file fires `change`.
fn reset_input(file_input: NodeRef<Input>) {
    if let Some(input) = file_input.get_untracked() {
        input.set_value("");
    }
}

/// Whether an event was dispatched on `element` itself.
fn is_target(target: Option<EventTarget>, element: &HtmlInputElement) -> bool {
    let element: &EventTarget = element.as_ref();
    target.as_ref() == Some(element)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn input_with_id(id: &str) -> HtmlInputElement {
        let input = gloo_utils::document()
            .create_element("input")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        input.set_id(id);
        input
    }

    #[wasm_bindgen_test]
    fn test_click_on_the_input_itself() {
        let input = input_with_id("fileInput");
        assert!(is_target(Some(input.clone().into()), &input));
    }

    #[wasm_bindgen_test]
    fn test_click_elsewhere_in_drop_zone() {
        let input = input_with_id("fileInput");
        let zone = gloo_utils::document().create_element("div").unwrap();
        assert!(!is_target(Some(zone.into()), &input));
        assert!(!is_target(None, &input));
    }

    #[wasm_bindgen_test]
    fn test_other_element_with_same_id() {
        let input = input_with_id("fileInput");
        let lookalike = input_with_id("fileInput");
        assert!(!is_target(Some(lookalike.into()), &input));
    }
}
