//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Health Report Analyzer"</h1>
            <p class="subtitle">
                "Upload a lab or medical report as a PDF or PNG. "
                "You will get a plain-language explanation of what the results mean."
            </p>
        </div>
    }
}
