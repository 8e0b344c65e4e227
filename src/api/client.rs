use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::stats::FetchStats;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

/// Shared GET-and-decode plumbing for every backend endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
    stats: FetchStats,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base: Url::parse(&config.base_url)?,
            stats: FetchStats::new(),
        })
    }

    /// A client with default timeout and user agent, pointed at `base`.
    pub fn with_base(base: &str) -> Result<Self> {
        Self::new(&DashboardConfig {
            base_url: base.to_string(),
            ..DashboardConfig::default()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// `{base}/{path}` with the given query pairs appended in order.
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        ))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path, query)?;
        log::debug!("GET {}", url);

        let start_time = Instant::now();
        let result = self.fetch(&url).await;
        let duration = start_time.elapsed();

        match result {
            Ok((value, bytes)) => {
                self.stats.record_success(duration, bytes);
                log::debug!("{} answered with {} bytes in {}ms", url, bytes, duration.as_millis());
                Ok(value)
            }
            Err(e) => {
                self.stats.record_failure(duration);
                Err(e)
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<(T, usize)> {
        let res = self.client.get(url.clone()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = res.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok((value, body.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_path_without_double_slash() {
        let api = ApiClient::with_base("http://localhost:8080/api/").unwrap();
        let url = api.endpoint("outlets", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/outlets");
    }

    #[test]
    fn endpoint_appends_query_in_order() {
        let api = ApiClient::with_base("http://localhost:8080/api").unwrap();
        let url = api
            .endpoint(
                "ingest-metrics",
                &[("days", "7".to_string()), ("country", "Norway".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/ingest-metrics?days=7&country=Norway"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(ApiClient::with_base("not a url"), Err(Error::Url(_))));
    }
}
