// WHY: line sink for replaced output; one line in, one line plus terminator out

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

/// Statistics for a completed write
#[derive(Debug, Clone)]
pub struct WriteStats {
    pub file_path: String,
    pub lines_written: u64,
    pub bytes_written: u64,
}

/// Async line sink writing each line followed by `\n`
#[derive(Debug, Clone, Default)]
pub struct AsyncFileWriter;

impl AsyncFileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Create or truncate `file_path` and write `lines` in order
    ///
    /// Bytes already flushed before a failure stay on disk.
    pub async fn write_lines<P, S>(&self, file_path: P, lines: &[S]) -> Result<WriteStats>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let path = file_path.as_ref();
        debug!("Writing {} lines to {}", lines.len(), path.display());

        let file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        let mut bytes_written = 0u64;

        for line in lines {
            let line = line.as_ref();
            writer
                .write_all(line.as_bytes())
                .await
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            writer
                .write_all(b"\n")
                .await
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            bytes_written += line.len() as u64 + 1;
        }

        writer
            .flush()
            .await
            .with_context(|| format!("Failed to flush {}", path.display()))?;

        let stats = WriteStats {
            file_path: path.display().to_string(),
            lines_written: lines.len() as u64,
            bytes_written,
        };
        info!("Wrote {}: {} lines, {} bytes", stats.file_path, stats.lines_written, stats.bytes_written);
        Ok(stats)
    }
}
