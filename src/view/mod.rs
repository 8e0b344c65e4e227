pub mod dashboard;
pub mod dev_panel;
pub mod rows;

pub use dashboard::Dashboard;
pub use dev_panel::{DevPanel, DevTab, MatchReport};
pub use rows::OutletRow;
