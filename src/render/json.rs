use super::Renderer;
use crate::error::Result;
use crate::view::OutletRow;
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Streams `{"days": [...], "rows": [...]}` to a file.
pub struct JsonRenderer {
    file: File,
    started: bool,
    first: bool,
}

impl JsonRenderer {
    pub fn new(path: PathBuf) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            file,
            started: false,
            first: true,
        })
    }
}

#[async_trait]
impl Renderer for JsonRenderer {
    async fn begin(&mut self, days: &[String]) -> Result<()> {
        write!(self.file, "{{\"days\":")?;
        serde_json::to_writer(&mut self.file, days)?;
        write!(self.file, ",\"rows\":[")?;
        self.started = true;
        Ok(())
    }

    async fn write(&mut self, row: &OutletRow) -> Result<()> {
        if !self.started {
            self.begin(&[]).await?;
        }
        if !self.first {
            write!(self.file, ",")?;
        } else {
            self.first = false;
        }

        serde_json::to_writer(&mut self.file, row)?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if !self.started {
            self.begin(&[]).await?;
        }
        write!(self.file, "]}}")?;
        self.file.flush()?;
        Ok(())
    }
}
