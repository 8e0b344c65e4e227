pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod render;
pub mod sparkline;
pub mod stats;
pub mod view;

pub use api::{
    ApiClient, IngestMetricsClient, IngestMetricsSource, MetricsQuery, OutletDirectory,
    OutletsClient, StatusClient, StatusSource,
};
pub use error::{Error, Result};
pub use index::SeriesIndex;
pub use model::{CountryOutlets, IngestMetricsResponse, IngestSeries, Outlet, OutletsResponse};
pub use stats::{FetchSnapshot, FetchStats};
pub use view::{Dashboard, DevPanel, DevTab, MatchReport, OutletRow};
