//! Visit Counter
//!
//! Placeholder filled in by the finicounter script loaded from `index.html`.

use leptos::*;

#[component]
pub fn VisitCounter() -> impl IntoView {
    view! {
        <div class="visit-counter">
            <span>"本站访问人数统计  "</span>
            <span id="finicount_views"></span>
        </div>
    }
}
