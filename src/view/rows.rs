use crate::config::SparklineConfig;
use crate::model::{IngestSeries, Outlet};
use crate::sparkline;
use serde::Serialize;

/// One outlet as presented by the dev panel, with its series resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutletRow {
    pub country: String,
    pub outlet_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub homepage: String,
    pub feed_count: usize,
    pub counts: Option<Vec<u64>>,
    pub total: Option<u64>,
    pub points: String,
}

impl OutletRow {
    pub fn new(
        country: &str,
        outlet: &Outlet,
        series: Option<&IngestSeries>,
        size: SparklineConfig,
    ) -> Self {
        let points = series
            .map(|s| sparkline::polyline(&s.values(), size.width, size.height))
            .unwrap_or_default();

        Self {
            country: country.to_string(),
            outlet_id: outlet.id.clone(),
            name: outlet.name.clone(),
            kind: outlet.kind.clone(),
            homepage: outlet.homepage.clone(),
            feed_count: outlet.feeds.len(),
            counts: series.map(|s| s.counts.clone()),
            total: series.map(IngestSeries::total),
            points,
        }
    }

    pub fn has_series(&self) -> bool {
        self.counts.is_some()
    }

    pub fn blocks(&self) -> String {
        self.counts
            .as_ref()
            .map(|c| sparkline::blocks(&c.iter().map(|&v| v as f64).collect::<Vec<_>>()))
            .unwrap_or_default()
    }
}

/// Case-insensitive substring match over country, id, name and type.
/// A blank query matches everything.
pub fn matches_query(country: &str, outlet: &Outlet, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [country, outlet.id.as_str(), outlet.name.as_str(), outlet.kind.as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
