//! Modal displaying the analysis returned by the server.

use leptos::*;

use crate::services::js_error_message;
use crate::types::AnalysisResult;

/// Full-screen overlay with the analysis text.
///
/// The text is rendered as text nodes, one per line, separated by `<br/>`.
#[component]
pub fn AnalysisModal(
    result: AnalysisResult,
    /// Close control pressed.
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let lines: Vec<String> = result.lines().map(str::to_string).collect();
    let last = lines.len().saturating_sub(1);
    let body = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                <>
                    {line}
                    {(i < last).then(|| view! { <br/> })}
                </>
            }
        })
        .collect_view();

    let on_restart = move |_| {
        log::info!("🔄 Reloading to analyze another report");
        if let Err(e) = gloo_utils::window().location().reload() {
            log::error!("Failed to reload page: {}", js_error_message(&e));
        }
    };

    view! {
        <div class="results-section">
            <div class="results-card">
                <div class="results-header">
                    <div>
                        <h2>"Analysis Results"</h2>
                        <span class="received-at">"Received at " {result.received_at.clone()}</span>
                    </div>
                    <button
                        class="close-results"
                        title="Close"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                </div>
                <div class="results-content">
                    <div class="analysis-text">{body}</div>
                </div>
                <div class="results-actions">
                    <button class="analyze-another" on:click=on_restart>
                        "Analyze Another Report"
                    </button>
                </div>
            </div>
        </div>
    }
}
