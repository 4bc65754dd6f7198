//! Dashboard Page
//!
//! Mounts the stats load and switches between the loading line, the error
//! line and the full dashboard.

use leptos::*;
use std::sync::Arc;

use codepace::{Content, DashboardConfig, LoadState, Screen, StatsLoader};

use crate::api::HttpStatsSource;
use crate::components::{Carousel, ErrorLine, Loading, ProgressBar, VisitCounter};

/// Dashboard page component
#[component]
pub fn Dashboard(config: Arc<DashboardConfig>) -> impl IntoView {
    let load_state = create_rw_signal(LoadState::Loading);

    // One request per mount; a result arriving after unmount is dropped.
    let loader = StatsLoader::new(Arc::clone(&config));
    let live = loader.live_flag();
    on_cleanup(move || live.retire());

    spawn_local(async move {
        loader
            .run(&HttpStatsSource, move |outcome| {
                load_state.update(|state| {
                    state.settle(outcome);
                });
            })
            .await;
    });

    let interval_ms = config.advance_interval_ms;
    let screen = create_memo(move |_| load_state.with(|state| Screen::build(state, &config)));

    move || match screen.get() {
        Screen::Loading => view! { <Loading /> }.into_view(),
        Screen::Error(message) => view! { <ErrorLine message=message /> }.into_view(),
        Screen::Content(content) => {
            view! { <DashboardContent content=content interval_ms=interval_ms /> }.into_view()
        }
    }
}

/// Loaded dashboard: heading, period, both bars, carousel, visit counter
#[component]
fn DashboardContent(content: Content, interval_ms: u32) -> impl IntoView {
    let Content {
        heading,
        period,
        bars: [bar_a, bar_b],
        images,
    } = content;

    view! {
        <div class="App">
            <h1>{heading}</h1>
            <span class="date">{period}</span>
            <ProgressBar bar=bar_a />
            <ProgressBar bar=bar_b accent="secondary" />
            <Carousel images=images interval_ms=interval_ms />
            <br />
            <VisitCounter />
        </div>
    }
}
