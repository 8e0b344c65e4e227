use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletCount {
    pub outlet_id: String,
    pub count: u64,
}

/// Summary of the backend's data directory and its most recent ingest run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub country_count: u32,
    #[serde(default)]
    pub outlet_count: u32,
    #[serde(default)]
    pub latest_ingest_date: Option<String>,
    #[serde(default)]
    pub articles_latest_run: u64,
    #[serde(default)]
    pub outlets_latest_run: Vec<OutletCount>,
    #[serde(default)]
    pub data_dir: String,
    #[serde(default)]
    pub error: Option<String>,
}
