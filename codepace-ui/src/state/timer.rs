//! Carousel Timers
//!
//! `TickScheduler` on top of `gloo_timers::callback::Timeout`. A fired timer
//! publishes its epoch into a signal; the carousel component feeds that back
//! into the driver. Dropping a `Timeout` clears it, so the default `cancel`
//! is enough.

use gloo_timers::callback::Timeout;
use leptos::*;

use codepace::TickScheduler;

/// Schedules single-shot browser timeouts that report into `expired`
pub struct TimeoutScheduler {
    expired: WriteSignal<Option<u64>>,
}

impl TimeoutScheduler {
    pub fn new(expired: WriteSignal<Option<u64>>) -> Self {
        Self { expired }
    }
}

impl TickScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, delay_ms: u32, epoch: u64) -> Timeout {
        let expired = self.expired;
        Timeout::new(delay_ms, move || {
            // The owning component may already be gone.
            let _ = expired.try_set(Some(epoch));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_fired_timer_reports_epoch() {
        let runtime = create_runtime();
        let (expired, set_expired) = create_signal(None);
        let mut scheduler = TimeoutScheduler::new(set_expired);

        let _handle = scheduler.schedule(10, 7);
        TimeoutFuture::new(50).await;

        assert_eq!(expired.get_untracked(), Some(7));
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_cancelled_timer_never_fires() {
        let runtime = create_runtime();
        let (expired, set_expired) = create_signal(None);
        let mut scheduler = TimeoutScheduler::new(set_expired);

        let handle = scheduler.schedule(10, 3);
        scheduler.cancel(handle);
        TimeoutFuture::new(50).await;

        assert_eq!(expired.get_untracked(), None);
        runtime.dispose();
    }
}
