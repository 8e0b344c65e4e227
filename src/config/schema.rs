use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Backend root, e.g. `http://localhost:8080/api`
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,

    #[serde(default = "default_days")]
    #[validate(range(min = 1))]
    pub days: u32,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default = "default_timeout")]
    #[validate(range(min = 1))]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    #[validate(length(min = 1))]
    pub user_agent: String,

    #[serde(default)]
    #[validate]
    pub sparkline: SparklineConfig,

    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Optional path to a parent configuration file to inherit from
    #[serde(default)]
    pub extends: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            days: default_days(),
            country: None,
            timeout_ms: default_timeout(),
            user_agent: default_user_agent(),
            sparkline: SparklineConfig::default(),
            output: None,
            extends: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct SparklineConfig {
    #[serde(default = "default_width")]
    #[validate(range(min = 1.0))]
    pub width: f64,

    #[serde(default = "default_height")]
    #[validate(range(min = 1.0))]
    pub height: f64,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputConfig {
    Console,
    Json { path: String },
    Csv { path: String },
}

pub(crate) fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

pub(crate) fn default_days() -> u32 {
    crate::api::metrics::DEFAULT_DAYS
}

pub(crate) fn default_timeout() -> u64 {
    10_000
}

pub(crate) fn default_user_agent() -> String {
    format!("newsdash/{}", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn default_width() -> f64 {
    crate::sparkline::DEFAULT_WIDTH
}

pub(crate) fn default_height() -> f64 {
    crate::sparkline::DEFAULT_HEIGHT
}
