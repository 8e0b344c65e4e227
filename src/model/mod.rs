pub mod metrics;
pub mod outlets;
pub mod status;

pub use metrics::{IngestMetricsResponse, IngestSeries};
pub use outlets::{CountryOutlets, Outlet, OutletsResponse};
pub use status::{OutletCount, StatusResponse};
