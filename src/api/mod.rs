//! HTTP clients for the dashboard backend.
//!
//! Each endpoint is reached through a trait so views can be handed any
//! source of outlets, metrics or status, not only the HTTP ones.

pub mod client;
pub mod metrics;
pub mod outlets;
pub mod status;

pub use client::ApiClient;
pub use metrics::{IngestMetricsClient, IngestMetricsSource, MetricsQuery};
pub use outlets::{OutletDirectory, OutletsClient};
pub use status::{StatusClient, StatusSource};
