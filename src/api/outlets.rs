use crate::api::client::ApiClient;
use crate::error::Result;
use crate::model::OutletsResponse;
use async_trait::async_trait;

#[async_trait]
pub trait OutletDirectory: Send + Sync {
    async fn outlets(&self) -> Result<OutletsResponse>;
}

pub struct OutletsClient {
    api: ApiClient,
}

impl OutletsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OutletDirectory for OutletsClient {
    async fn outlets(&self) -> Result<OutletsResponse> {
        let res: OutletsResponse = self.api.get_json("outlets", &[]).await?;
        log::info!(
            "Fetched {} outlets across {} countries",
            res.outlet_count(),
            res.countries.len()
        );
        Ok(res)
    }
}
