use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for line source behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
        }
    }
}

/// Statistics for a completed read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async line source: streams a text file line-by-line
///
/// Line terminators (`\n`, `\r\n`) are stripped; everything else on the line,
/// including internal whitespace and punctuation, is preserved.
#[derive(Debug, Clone, Default)]
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read all lines of a file in order
    ///
    /// Any open or read failure aborts the read; partial lines are never returned.
    pub async fn read_file_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to open file {}: {}", path.display(), e);
                return Err(e).with_context(|| format!("Failed to open file {}", path.display()));
            }
        };

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut result_lines = Vec::new();
        let mut byte_count = 0u64;
        let mut buf = String::new();

        loop {
            let line_number = result_lines.len() + 1;
            buf.clear();
            match reader.read_line(&mut buf).await {
                Ok(0) => break,
                Ok(n) => {
                    // counts terminators exactly as they appear on disk
                    byte_count += n as u64;
                    if buf.ends_with('\n') {
                        buf.pop();
                        if buf.ends_with('\r') {
                            buf.pop();
                        }
                    }
                    result_lines.push(buf.clone());
                }
                Err(e) => {
                    warn!("Read error in {} at line {}: {}", path.display(), line_number, e);
                    return Err(e).with_context(|| {
                        format!("Failed to read {} at line {}", path.display(), line_number)
                    });
                }
            }
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: result_lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );

        Ok((result_lines, stats))
    }
}
