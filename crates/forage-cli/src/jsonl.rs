use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use forage_tools::{TraceEvent, TraceSink};

/// Appends each trace event to a file as one JSON object per line.
pub struct JsonlTraceSink {
    writer: BufWriter<File>,
    failed: bool,
}

impl JsonlTraceSink {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)
            .with_context(|| format!("failed to open trace file {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            failed: false,
        })
    }
}

impl TraceSink for JsonlTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        if self.failed {
            return;
        }
        let written = serde_json::to_string(&event)
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.writer, "{line}"));
        if let Err(err) = written {
            // Report once; the run itself keeps going.
            tracing::warn!(error = %err, "trace output disabled");
            self.failed = true;
        }
    }
}

impl Drop for JsonlTraceSink {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            tracing::warn!(error = %err, "failed to flush trace file");
        }
    }
}
