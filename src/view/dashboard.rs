use crate::api::{OutletDirectory, StatusSource};
use crate::model::{CountryOutlets, StatusResponse};
use std::sync::Arc;

/// Landing view: backend status plus the outlet directory grouped by country.
pub struct Dashboard {
    outlets_api: Arc<dyn OutletDirectory>,
    status_api: Arc<dyn StatusSource>,
    countries: Vec<CountryOutlets>,
    status: Option<StatusResponse>,
    last_error: Option<String>,
}

impl Dashboard {
    pub fn new(outlets_api: Arc<dyn OutletDirectory>, status_api: Arc<dyn StatusSource>) -> Self {
        Self {
            outlets_api,
            status_api,
            countries: Vec::new(),
            status: None,
            last_error: None,
        }
    }

    /// Same retain-on-failure policy as the dev panel.
    pub async fn load(&mut self) -> bool {
        let (outlets, status) =
            futures::join!(self.outlets_api.outlets(), self.status_api.status());

        let mut errors = Vec::new();
        match outlets {
            Ok(res) => self.countries = res.countries,
            Err(e) => {
                log::warn!("Keeping previous outlets, fetch failed: {}", e);
                errors.push(format!("outlets: {}", e));
            }
        }
        match status {
            Ok(res) => self.status = Some(res),
            Err(e) => {
                log::warn!("Keeping previous status, fetch failed: {}", e);
                errors.push(format!("status: {}", e));
            }
        }

        self.last_error = if errors.is_empty() {
            None
        } else {
            Some(errors.join("; "))
        };
        self.last_error.is_none()
    }

    /// Fetches the backend status alone. The outlet directory is left as is.
    pub async fn load_status(&mut self) -> bool {
        match self.status_api.status().await {
            Ok(res) => {
                self.status = Some(res);
                self.last_error = None;
            }
            Err(e) => {
                log::warn!("Keeping previous status, fetch failed: {}", e);
                self.last_error = Some(format!("status: {}", e));
            }
        }
        self.last_error.is_none()
    }

    pub fn countries(&self) -> &[CountryOutlets] {
        &self.countries
    }

    pub fn status(&self) -> Option<&StatusResponse> {
        self.status.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Article count the latest ingest run recorded for `outlet_id`.
    pub fn latest_run_count(&self, outlet_id: &str) -> Option<u64> {
        self.status.as_ref().and_then(|s| {
            s.outlets_latest_run
                .iter()
                .find(|o| o.outlet_id == outlet_id)
                .map(|o| o.count)
        })
    }

    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let Some(status) = &self.status else {
            return lines;
        };

        lines.push(format!(
            "Backend: {} countries, {} outlets (data dir {})",
            status.country_count, status.outlet_count, status.data_dir
        ));
        match &status.latest_ingest_date {
            Some(date) => lines.push(format!(
                "Latest run {}: {} articles",
                date, status.articles_latest_run
            )),
            None => lines.push("Latest run: none".to_string()),
        }
        if let Some(err) = &status.error {
            lines.push(format!("Backend error: {}", err));
        }
        lines
    }

    pub fn outlet_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for c in &self.countries {
            lines.push(format!("{} ({} outlets)", c.country, c.outlets.len()));
            for o in &c.outlets {
                let latest = self
                    .latest_run_count(&o.id)
                    .map(|n| format!(" [{} latest]", n))
                    .unwrap_or_default();
                lines.push(format!(
                    "  {:<16} {:<28} {:<10} {} feeds{}",
                    o.id,
                    o.name,
                    o.kind,
                    o.feeds.len(),
                    latest
                ));
            }
        }
        lines
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = self.status_lines();
        lines.extend(self.outlet_lines());
        lines
    }
}
