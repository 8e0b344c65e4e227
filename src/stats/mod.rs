pub mod collector;
pub mod snapshot;

pub use collector::FetchStats;
pub use snapshot::FetchSnapshot;
