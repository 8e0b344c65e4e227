use super::Renderer;
use crate::error::{Error, Result};
use crate::view::OutletRow;
use async_trait::async_trait;
use chrono::NaiveDate;
use indicatif::MultiProgress;
use std::sync::Arc;

pub struct ConsoleRenderer {
    multi: Option<Arc<MultiProgress>>,
}

impl ConsoleRenderer {
    pub fn new(multi: Option<Arc<MultiProgress>>) -> Self {
        Self { multi }
    }

    fn print(&self, line: &str) -> Result<()> {
        match &self.multi {
            Some(multi) => multi
                .println(line)
                .map_err(|e| Error::Internal(e.to_string())),
            None => {
                println!("{}", line);
                Ok(())
            }
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(None)
    }
}

/// `2024-05-01` becomes `Wed 01`; anything else is shown as given.
pub fn day_heading(label: &str) -> String {
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .map(|d| d.format("%a %d").to_string())
        .unwrap_or_else(|_| label.to_string())
}

pub fn format_header(days: &[String]) -> String {
    let span = match (days.first(), days.last()) {
        (Some(first), Some(last)) => format!("{} .. {}", day_heading(first), day_heading(last)),
        _ => "no data".to_string(),
    };
    format!(
        "{:<12} {:<16} {:<24} {:<10} {:>5} {:>7}  {}",
        "COUNTRY", "OUTLET", "NAME", "TYPE", "FEEDS", "TOTAL", span
    )
}

pub fn format_row(row: &OutletRow) -> String {
    let total = row
        .total
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<12} {:<16} {:<24} {:<10} {:>5} {:>7}  {}",
        row.country,
        row.outlet_id,
        row.name,
        row.kind,
        row.feed_count,
        total,
        row.blocks()
    )
}

#[async_trait]
impl Renderer for ConsoleRenderer {
    async fn begin(&mut self, days: &[String]) -> Result<()> {
        self.print(&format_header(days))
    }

    async fn write(&mut self, row: &OutletRow) -> Result<()> {
        self.print(&format_row(row))
    }
}
