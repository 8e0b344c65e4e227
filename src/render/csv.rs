use super::Renderer;
use crate::error::Result;
use crate::view::OutletRow;
use async_trait::async_trait;
use std::path::PathBuf;

/// One line per outlet; one column per day label after the fixed columns.
pub struct CsvRenderer {
    writer: csv::Writer<std::fs::File>,
    days: usize,
}

impl CsvRenderer {
    pub fn new(path: PathBuf) -> Result<Self> {
        let writer = csv::Writer::from_path(path)?;
        Ok(Self { writer, days: 0 })
    }
}

#[async_trait]
impl Renderer for CsvRenderer {
    async fn begin(&mut self, days: &[String]) -> Result<()> {
        let mut headers = vec![
            "country".to_string(),
            "outlet_id".to_string(),
            "name".to_string(),
            "type".to_string(),
            "homepage".to_string(),
            "feed_count".to_string(),
            "total".to_string(),
        ];
        headers.extend(days.iter().cloned());
        self.writer.write_record(&headers)?;
        self.days = days.len();
        Ok(())
    }

    async fn write(&mut self, row: &OutletRow) -> Result<()> {
        let mut record = vec![
            row.country.clone(),
            row.outlet_id.clone(),
            row.name.clone(),
            row.kind.clone(),
            row.homepage.clone(),
            row.feed_count.to_string(),
            row.total.map(|t| t.to_string()).unwrap_or_default(),
        ];
        match &row.counts {
            Some(counts) => record.extend(counts.iter().map(|c| c.to_string())),
            None => record.extend(std::iter::repeat(String::new()).take(self.days)),
        }
        self.writer.write_record(&record)?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
