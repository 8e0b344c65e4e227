use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchSnapshot {
    pub requests_total: u64,
    pub requests_success: u64,
    pub requests_failed: u64,
    pub bytes_received: u64,
    pub success_rate: f64,
    pub avg_response_time_ms: u64,
    pub elapsed_seconds: f64,
}
