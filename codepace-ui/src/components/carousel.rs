//! Carousel Component
//!
//! Renders every image, marks the current one active and exposes one dot per
//! image for manual selection. Timing is owned by `CarouselDriver`.

use leptos::*;

use codepace::{CarouselDriver, DEFAULT_ADVANCE_INTERVAL_MS};

use crate::state::TimeoutScheduler;

/// Auto-advancing image carousel
#[component]
pub fn Carousel(
    /// Image URLs in display order
    images: Vec<String>,
    /// Delay between automatic advances
    #[prop(default = DEFAULT_ADVANCE_INTERVAL_MS)]
    interval_ms: u32,
) -> impl IntoView {
    let (expired, set_expired) = create_signal(None::<u64>);

    let driver = match CarouselDriver::new(
        images.len(),
        interval_ms,
        TimeoutScheduler::new(set_expired),
    ) {
        Ok(driver) => driver,
        Err(e) => {
            tracing::error!(error = %e, "Carousel disabled");
            return view! {}.into_view();
        }
    };

    let driver = create_rw_signal(driver);
    driver.update(|d| d.start());

    // Feed fired timers back into the driver; stale epochs are ignored there.
    create_effect(move |_| {
        if let Some(epoch) = expired.get() {
            driver.update(|d| {
                d.on_timer(epoch);
            });
        }
    });

    on_cleanup(move || {
        let _ = driver.try_update(|d| d.stop());
    });

    let select = move |index: usize| {
        driver.update(|d| {
            if let Err(e) = d.select(index) {
                tracing::warn!(error = %e, "Ignoring carousel selection");
            }
        });
    };

    let slides = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <img
                    src=src
                    alt=format!("Slide {}", index + 1)
                    class:active=move || driver.with(|d| d.is_current(index))
                />
            }
        })
        .collect_view();

    let dots = (0..driver.with_untracked(|d| d.len()))
        .map(|index| {
            view! {
                <span
                    class="carousel-dot"
                    class:active=move || driver.with(|d| d.is_current(index))
                    on:click=move |_| select(index)
                />
            }
        })
        .collect_view();

    view! {
        <div class="carousel-container">
            <div class="carousel-slide">{slides}</div>
            <div class="carousel-dots">{dots}</div>
        </div>
    }
    .into_view()
}
