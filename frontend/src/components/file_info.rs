//! Summary panel for the selected file.

use leptos::*;

use crate::types::{FileKind, SelectedFile};
use crate::validation::format_file_size;

/// Name, kind and size of the current selection, with a remove control.
///
/// Always rendered so its element ids stay in the document; hidden while
/// nothing is selected.
#[component]
pub fn FileInfo(
    #[prop(into)] file: Signal<Option<SelectedFile>>,
    #[prop(into)] kind: Signal<Option<FileKind>>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let name = move || file.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default());
    let size = move || file.with(|f| f.as_ref().map(|f| format_file_size(f.size)).unwrap_or_default());

    view! {
        <div
            id="fileInfo"
            class="file-info"
            style:display=move || if file.with(Option::is_some) { "block" } else { "none" }
        >
            <div class="file-details">
                <span class="file-icon">{move || kind.get().map(|k| k.emoji()).unwrap_or("📎")}</span>
                <div class="file-meta">
                    <div id="fileName" class="file-name">{name}</div>
                    <div class="file-sub">
                        <span class="file-kind">{move || kind.get().map(|k| k.label()).unwrap_or_default()}</span>
                        " · "
                        <span id="fileSize" class="file-size">{size}</span>
                    </div>
                </div>
                <button
                    type="button"
                    id="removeFile"
                    class="remove-file"
                    title="Remove file"
                    on:click=move |_| on_remove.call(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
