use crate::api::{IngestMetricsSource, MetricsQuery, OutletDirectory};
use crate::config::SparklineConfig;
use crate::index::{series_key, SeriesIndex};
use crate::model::{CountryOutlets, IngestSeries};
use crate::sparkline;
use crate::view::rows::{matches_query, OutletRow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevTab {
    #[default]
    Ingestion,
    Matching,
}

impl fmt::Display for DevTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevTab::Ingestion => write!(f, "ingestion"),
            DevTab::Matching => write!(f, "matching"),
        }
    }
}

impl FromStr for DevTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ingestion" => Ok(DevTab::Ingestion),
            "matching" => Ok(DevTab::Matching),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

/// How the outlet directory and the metrics index line up. Entries are
/// `country|outletId` keys, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub matched: Vec<String>,
    pub outlets_without_series: Vec<String>,
    pub series_without_outlet: Vec<String>,
}

/// State behind the developer panel: the outlet directory, the series
/// index and the transient tab/search selection.
pub struct DevPanel {
    outlets_api: Arc<dyn OutletDirectory>,
    metrics_api: Arc<dyn IngestMetricsSource>,
    query: MetricsQuery,
    sparkline: SparklineConfig,
    active_tab: DevTab,
    search_query: String,
    countries: Vec<CountryOutlets>,
    ingest_days: Vec<String>,
    index: SeriesIndex,
    last_error: Option<String>,
}

impl DevPanel {
    pub fn new(
        outlets_api: Arc<dyn OutletDirectory>,
        metrics_api: Arc<dyn IngestMetricsSource>,
    ) -> Self {
        Self {
            outlets_api,
            metrics_api,
            query: MetricsQuery::default(),
            sparkline: SparklineConfig::default(),
            active_tab: DevTab::default(),
            search_query: String::new(),
            countries: Vec::new(),
            ingest_days: Vec::new(),
            index: SeriesIndex::new(),
            last_error: None,
        }
    }

    pub fn with_query(mut self, query: MetricsQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_sparkline(mut self, sparkline: SparklineConfig) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Fetches outlets and metrics concurrently and stores whichever
    /// succeeded. A failed fetch leaves its previous data in place and is
    /// recorded in `last_error`. Returns true when both fetches succeeded.
    pub async fn load(&mut self) -> bool {
        let (outlets, metrics) = futures::join!(
            self.outlets_api.outlets(),
            self.metrics_api.ingest_metrics(&self.query)
        );

        let mut errors = Vec::new();

        match outlets {
            Ok(res) => self.countries = res.countries,
            Err(e) => {
                log::warn!("Keeping previous outlets, fetch failed: {}", e);
                errors.push(format!("outlets: {}", e));
            }
        }

        match metrics {
            Ok(res) => {
                self.index.rebuild(&res);
                self.ingest_days = res.days;
            }
            Err(e) => {
                log::warn!("Keeping previous ingest metrics, fetch failed: {}", e);
                errors.push(format!("ingest metrics: {}", e));
            }
        }

        self.last_error = if errors.is_empty() {
            None
        } else {
            Some(errors.join("; "))
        };
        self.last_error.is_none()
    }

    pub fn set_tab(&mut self, tab: DevTab) {
        self.active_tab = tab;
    }

    pub fn on_search_change(&mut self, value: &str) {
        self.search_query = value.to_string();
    }

    pub fn active_tab(&self) -> DevTab {
        self.active_tab
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn countries(&self) -> &[CountryOutlets] {
        &self.countries
    }

    pub fn ingest_days(&self) -> &[String] {
        &self.ingest_days
    }

    pub fn index(&self) -> &SeriesIndex {
        &self.index
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn outlet_series(&self, country: &str, outlet_id: &str) -> Option<&IngestSeries> {
        self.index.get(country, outlet_id)
    }

    /// Polyline for an optional series; absent or empty input gives `""`.
    pub fn sparkline_points(&self, values: Option<&[f64]>, width: f64, height: f64) -> String {
        values
            .map(|v| sparkline::polyline(v, width, height))
            .unwrap_or_default()
    }

    /// Outlet rows passing the current search, in directory order.
    pub fn rows(&self) -> Vec<OutletRow> {
        self.countries
            .iter()
            .flat_map(|c| c.outlets.iter().map(move |o| (c.country.as_str(), o)))
            .filter(|(country, outlet)| matches_query(country, outlet, &self.search_query))
            .map(|(country, outlet)| {
                OutletRow::new(
                    country,
                    outlet,
                    self.outlet_series(country, &outlet.id),
                    self.sparkline,
                )
            })
            .collect()
    }

    pub fn matching(&self) -> MatchReport {
        let mut report = MatchReport::default();
        let mut listed = HashSet::new();

        for c in &self.countries {
            for outlet in &c.outlets {
                let key = series_key(&c.country, &outlet.id);
                if self.index.contains(&c.country, &outlet.id) {
                    report.matched.push(key.clone());
                } else {
                    report.outlets_without_series.push(key.clone());
                }
                listed.insert(key);
            }
        }

        report.series_without_outlet = self
            .index
            .iter()
            .map(|s| series_key(&s.country, &s.outlet_id))
            .filter(|key| !listed.contains(key))
            .collect();

        report.matched.sort();
        report.outlets_without_series.sort();
        report.series_without_outlet.sort();
        report
    }
}
