use crate::stats::snapshot::FetchSnapshot;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// Request counters shared by every client built from one `ApiClient`.
#[derive(Clone)]
pub struct FetchStats {
    requests_total: Arc<AtomicU64>,
    requests_success: Arc<AtomicU64>,
    requests_failed: Arc<AtomicU64>,
    bytes_received: Arc<AtomicU64>,
    total_response_time_ms: Arc<AtomicU64>,
    start_time: Arc<Instant>,
}

impl Default for FetchStats {
    fn default() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            requests_success: Arc::new(AtomicU64::new(0)),
            requests_failed: Arc::new(AtomicU64::new(0)),
            bytes_received: Arc::new(AtomicU64::new(0)),
            total_response_time_ms: Arc::new(AtomicU64::new(0)),
            start_time: Arc::new(Instant::now()),
        }
    }
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, duration: Duration, bytes: usize) {
        self.requests_total.fetch_add(1, Ordering::SeqCst);
        self.requests_success.fetch_add(1, Ordering::SeqCst);
        self.bytes_received.fetch_add(bytes as u64, Ordering::SeqCst);
        self.total_response_time_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn record_failure(&self, duration: Duration) {
        self.requests_total.fetch_add(1, Ordering::SeqCst);
        self.requests_failed.fetch_add(1, Ordering::SeqCst);
        self.total_response_time_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> FetchSnapshot {
        let total_requests = self.requests_total.load(Ordering::SeqCst);
        let success = self.requests_success.load(Ordering::SeqCst);
        let failed = self.requests_failed.load(Ordering::SeqCst);
        let total_time = self.total_response_time_ms.load(Ordering::SeqCst);

        let success_rate = if total_requests > 0 {
            (success as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };

        let avg_response_time_ms = if total_requests > 0 {
            total_time / total_requests
        } else {
            0
        };

        FetchSnapshot {
            requests_total: total_requests,
            requests_success: success,
            requests_failed: failed,
            bytes_received: self.bytes_received.load(Ordering::SeqCst),
            success_rate,
            avg_response_time_ms,
            elapsed_seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }
}
