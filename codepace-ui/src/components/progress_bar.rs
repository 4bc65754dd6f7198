//! Progress Bar Component
//!
//! Displays one language's hours against its target.

use leptos::*;

use codepace::ProgressBar as BarModel;

/// Labeled percentage bar
#[component]
pub fn ProgressBar(
    /// Precomputed width and label
    bar: BarModel,
    /// Extra class selecting the bar's color scheme
    #[prop(default = "primary")]
    accent: &'static str,
) -> impl IntoView {
    let label = bar.label();

    view! {
        <div class=format!("progress-bar-container {}", accent)>
            <div class="progress-bar-fill" style=bar.width_style() />
            <span class="percentage-text-centered">
                <span>{label}</span>
            </span>
        </div>
    }
}
