//! UI Components
//!
//! Leptos components for the dashboard.

pub mod carousel;
pub mod loading;
pub mod progress_bar;
pub mod visit_counter;

pub use carousel::Carousel;
pub use loading::{ErrorLine, Loading};
pub use progress_bar::ProgressBar;
pub use visit_counter::VisitCounter;
