//! State Management
//!
//! Browser-side pieces of component state that the core crate leaves
//! abstract.

pub mod timer;

pub use timer::TimeoutScheduler;
