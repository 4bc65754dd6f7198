//! App Root Component
//!
//! Loads the compiled-in deployment variant and hands it to the dashboard.

use leptos::*;
use std::sync::Arc;

use codepace::{DashboardConfig, Variant};

use crate::components::ErrorLine;
use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    match DashboardConfig::builtin(Variant::default()) {
        Ok(config) => view! { <Dashboard config=Arc::new(config) /> }.into_view(),
        Err(e) => {
            tracing::error!(error = %e, "Built-in dashboard config is invalid");
            view! { <ErrorLine message=format!("Error: {}", e) /> }.into_view()
        }
    }
}
