//! Pages
//!
//! Top-level views.

pub mod dashboard;

pub use dashboard::Dashboard;
