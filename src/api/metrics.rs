use crate::api::client::ApiClient;
use crate::error::Result;
use crate::model::IngestMetricsResponse;
use async_trait::async_trait;

pub const DEFAULT_DAYS: u32 = 7;

/// Lookback window and optional country filter for `/ingest-metrics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsQuery {
    pub days: u32,
    pub country: Option<String>,
}

impl Default for MetricsQuery {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            country: None,
        }
    }
}

impl MetricsQuery {
    pub fn new(days: u32, country: Option<String>) -> Self {
        Self { days, country }
    }

    /// `days` always goes out; `country` only when it carries text.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("days", self.days.to_string())];
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("country", country.to_string()));
        }
        pairs
    }
}

#[async_trait]
pub trait IngestMetricsSource: Send + Sync {
    async fn ingest_metrics(&self, query: &MetricsQuery) -> Result<IngestMetricsResponse>;
}

pub struct IngestMetricsClient {
    api: ApiClient,
}

impl IngestMetricsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl IngestMetricsSource for IngestMetricsClient {
    async fn ingest_metrics(&self, query: &MetricsQuery) -> Result<IngestMetricsResponse> {
        let res: IngestMetricsResponse =
            self.api.get_json("ingest-metrics", &query.to_pairs()).await?;
        res.check_alignment()?;
        log::info!(
            "Fetched {} series over {} days",
            res.series.len(),
            res.days.len()
        );
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_sends_seven_days_only() {
        assert_eq!(
            MetricsQuery::default().to_pairs(),
            vec![("days", "7".to_string())]
        );
    }

    #[test]
    fn empty_country_is_not_sent() {
        let query = MetricsQuery::new(14, Some(String::new()));
        assert_eq!(query.to_pairs(), vec![("days", "14".to_string())]);
    }

    #[test]
    fn zero_days_is_passed_through() {
        let query = MetricsQuery::new(0, Some("Norway".into()));
        assert_eq!(
            query.to_pairs(),
            vec![("days", "0".to_string()), ("country", "Norway".to_string())]
        );
    }
}
