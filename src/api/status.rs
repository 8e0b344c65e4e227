use crate::api::client::ApiClient;
use crate::error::Result;
use crate::model::StatusResponse;
use async_trait::async_trait;

#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn status(&self) -> Result<StatusResponse>;
}

pub struct StatusClient {
    api: ApiClient,
}

impl StatusClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn status(&self) -> Result<StatusResponse> {
        let res: StatusResponse = self.api.get_json("status", &[]).await?;
        if let Some(err) = &res.error {
            log::warn!("Backend reported a status error: {}", err);
        }
        Ok(res)
    }
}
