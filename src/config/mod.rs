pub mod loader;
pub mod schema;

pub use loader::{ConfigLoader, Overrides};
pub use schema::{DashboardConfig, OutputConfig, SparklineConfig};
