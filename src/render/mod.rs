use crate::error::Result;
use crate::view::OutletRow;
use async_trait::async_trait;

pub mod console;
pub mod csv;
pub mod json;

/// Sink for dev-panel rows. `begin` receives the day labels the rows'
/// counts are aligned to.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn begin(&mut self, _days: &[String]) -> Result<()> {
        Ok(())
    }
    async fn write(&mut self, row: &OutletRow) -> Result<()>;
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

pub async fn render_rows(
    renderer: &mut dyn Renderer,
    days: &[String],
    rows: &[OutletRow],
) -> Result<()> {
    renderer.begin(days).await?;
    for row in rows {
        renderer.write(row).await?;
    }
    renderer.close().await
}
