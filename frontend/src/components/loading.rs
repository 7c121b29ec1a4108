use leptos::*;

#[component]
pub fn LoadingOverlay(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loadingOverlay"
            class="loading-overlay"
            style:display=move || if visible.get() { "flex" } else { "none" }
        >
            <div class="spinner"></div>
            <p class="loading-text">"Analyzing your report..."</p>
        </div>
    }
}
