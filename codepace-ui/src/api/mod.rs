//! API Layer
//!
//! Browser transport for the stats request.

pub mod client;

pub use client::HttpStatsSource;
