//! HTTP Stats Client
//!
//! `StatsSource` backed by the browser's fetch via `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;

use codepace::{FetchResult, StatsError, StatsSource};

/// Performs a plain GET and returns the body text
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpStatsSource;

#[async_trait(?Send)]
impl StatsSource for HttpStatsSource {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(StatsError::Http {
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(network_error)
    }
}

/// Keep only the JS error's `message`, without the `TypeError: ` prefix
fn network_error(err: gloo_net::Error) -> StatsError {
    match err {
        gloo_net::Error::JsError(js) => StatsError::Network(js.message),
        other => StatsError::Network(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rejected_fetch_keeps_message() {
        let err = gloo_net::Error::JsError(js_sys::Error::new("Failed to fetch").into());

        assert_eq!(
            network_error(err),
            StatsError::Network("Failed to fetch".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_other_errors_use_display() {
        let err = gloo_net::Error::GlooError("body already read".to_string());

        assert_eq!(
            network_error(err),
            StatsError::Network("body already read".to_string())
        );
    }
}
