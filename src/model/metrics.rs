use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Daily ingestion counts for one outlet, aligned with the response's day labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestSeries {
    pub country: String,
    pub outlet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet_name: Option<String>,
    #[serde(default)]
    pub counts: Vec<u64>,
}

impl IngestSeries {
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn values(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestMetricsResponse {
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub series: Vec<IngestSeries>,
}

impl IngestMetricsResponse {
    /// Every series must carry exactly one count per day label.
    pub fn check_alignment(&self) -> Result<()> {
        let expected = self.days.len();
        match self.series.iter().find(|s| s.counts.len() != expected) {
            Some(s) => Err(Error::Data(format!(
                "series {}|{} has {} counts for {} days",
                s.country,
                s.outlet_id,
                s.counts.len(),
                expected
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(id: &str, counts: Vec<u64>) -> IngestSeries {
        IngestSeries {
            country: "Norway".into(),
            outlet_id: id.into(),
            outlet_name: None,
            counts,
        }
    }

    #[test]
    fn aligned_series_pass() {
        let res = IngestMetricsResponse {
            days: vec!["2024-05-01".into(), "2024-05-02".into()],
            series: vec![series("a", vec![1, 2]), series("b", vec![0, 0])],
        };
        assert!(res.check_alignment().is_ok());
    }

    #[test]
    fn short_series_is_rejected() {
        let res = IngestMetricsResponse {
            days: vec!["2024-05-01".into(), "2024-05-02".into()],
            series: vec![series("a", vec![1, 2]), series("b", vec![3])],
        };
        let err = res.check_alignment().unwrap_err();
        assert!(matches!(err, Error::Data(_)));
        assert!(err.to_string().contains("Norway|b"));
    }

    #[test]
    fn decodes_camel_case_and_optional_name() {
        let body = r#"{"days":["2024-05-01"],"series":[
            {"country":"Norway","outletId":"nrk","outletName":"NRK","counts":[4]},
            {"country":"Sweden","outletId":"svt","counts":[2]}
        ]}"#;
        let res: IngestMetricsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(res.series[0].outlet_name.as_deref(), Some("NRK"));
        assert_eq!(res.series[1].outlet_name, None);
        assert_eq!(res.series[0].total(), 4);
    }
}
