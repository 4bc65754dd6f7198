//! Loading Component
//!
//! The two single-line screens shown instead of the dashboard content.

use leptos::*;

use codepace::LOADING_TEXT;

/// Shown while the stats request is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="App">
            <div class="loading-spinner" />
            <span>{LOADING_TEXT}</span>
        </div>
    }
}

/// Terminal error line; no bars or carousel are rendered with it
#[component]
pub fn ErrorLine(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="App error">{message}</div>
    }
}
