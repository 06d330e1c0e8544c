// WHY: demo input used when no source path is given on the command line

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name the sample is written under
pub const SAMPLE_FILE_NAME: &str = "sample_input.txt";

/// Four-line sample text, written without a trailing newline
pub const SAMPLE_TEXT: &str = "hello world\nthis is a simple test\nhello Java\nhello again world";

/// Generate the sample file path inside `dir`
pub fn sample_file_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    dir.as_ref().join(SAMPLE_FILE_NAME)
}

/// Write the sample text into `dir`, replacing any previous sample
pub async fn create_sample_file<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let path = sample_file_path(dir);
    tokio::fs::write(&path, SAMPLE_TEXT)
        .await
        .with_context(|| format!("Failed to write sample file {}", path.display()))?;
    info!("Created sample file: {}", path.display());
    Ok(path)
}
