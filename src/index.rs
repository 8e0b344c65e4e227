use crate::model::{IngestMetricsResponse, IngestSeries};
use std::collections::HashMap;

/// Composite lookup key for one outlet's series.
pub fn series_key(country: &str, outlet_id: &str) -> String {
    format!("{}|{}", country, outlet_id)
}

/// Series of the latest metrics response, keyed by `country|outletId`.
#[derive(Debug, Clone, Default)]
pub struct SeriesIndex {
    by_key: HashMap<String, IngestSeries>,
}

impl SeriesIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_response(res: &IngestMetricsResponse) -> Self {
        let mut index = Self::new();
        index.rebuild(res);
        index
    }

    /// Drops every entry and refills from `res`. On a duplicate key the
    /// later series wins.
    pub fn rebuild(&mut self, res: &IngestMetricsResponse) {
        self.by_key.clear();
        for series in &res.series {
            self.by_key
                .insert(series_key(&series.country, &series.outlet_id), series.clone());
        }
        log::debug!("Series index rebuilt with {} entries", self.by_key.len());
    }

    pub fn get(&self, country: &str, outlet_id: &str) -> Option<&IngestSeries> {
        self.by_key.get(&series_key(country, outlet_id))
    }

    pub fn contains(&self, country: &str, outlet_id: &str) -> bool {
        self.by_key.contains_key(&series_key(country, outlet_id))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngestSeries> {
        self.by_key.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(country: &str, id: &str, counts: Vec<u64>) -> IngestSeries {
        IngestSeries {
            country: country.into(),
            outlet_id: id.into(),
            outlet_name: None,
            counts,
        }
    }

    fn response() -> IngestMetricsResponse {
        IngestMetricsResponse {
            days: vec!["2024-05-01".into(), "2024-05-02".into()],
            series: vec![series("NO", "A", vec![1, 2]), series("NO", "B", vec![3, 4])],
        }
    }

    #[test]
    fn looks_up_by_country_and_outlet() {
        let index = SeriesIndex::from_response(&response());
        assert_eq!(index.get("NO", "A").map(|s| s.counts.clone()), Some(vec![1, 2]));
        assert_eq!(index.get("NO", "B").map(|s| s.counts.clone()), Some(vec![3, 4]));
        assert!(index.get("SE", "A").is_none());
        assert!(!index.contains("SE", "A"));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let res = response();
        let mut index = SeriesIndex::from_response(&res);
        let first = index.get("NO", "A").cloned();
        index.rebuild(&res);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("NO", "A").cloned(), first);
        assert!(index.get("SE", "A").is_none());
    }

    #[test]
    fn rebuild_discards_previous_entries() {
        let mut index = SeriesIndex::from_response(&response());
        index.rebuild(&IngestMetricsResponse {
            days: vec!["2024-05-03".into()],
            series: vec![series("SE", "A", vec![9])],
        });
        assert_eq!(index.len(), 1);
        assert!(index.get("NO", "A").is_none());
        assert_eq!(index.get("SE", "A").map(|s| s.total()), Some(9));
    }

    #[test]
    fn later_duplicate_wins() {
        let index = SeriesIndex::from_response(&IngestMetricsResponse {
            days: vec!["2024-05-01".into()],
            series: vec![series("NO", "A", vec![1]), series("NO", "A", vec![5])],
        });
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("NO", "A").map(|s| s.total()), Some(5));
    }

    #[test]
    fn key_joins_with_pipe() {
        assert_eq!(series_key("Norway", "nrk"), "Norway|nrk");
    }
}
