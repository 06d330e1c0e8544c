// WHY: every run parameter is fixed here before any index or replace work starts

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::reader::ReaderConfig;
use crate::sample;

/// Default output path when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Word to search for and its replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceRequest {
    pub search_word: String,
    pub replace_word: String,
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source text; `None` means generate the sample into `sample_dir`
    pub input_path: Option<PathBuf>,
    pub sample_dir: PathBuf,
    /// `None` runs the index build and reports only
    pub replace: Option<ReplaceRequest>,
    pub output_path: PathBuf,
    pub stats_out: Option<PathBuf>,
    pub reader: ReaderConfig,
    /// Print original and modified files side by side after a replace
    pub compare: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            sample_dir: PathBuf::from("."),
            replace: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            stats_out: None,
            reader: ReaderConfig::default(),
            compare: true,
        }
    }
}

impl RunConfig {
    /// Reject configurations that cannot run, before touching any file
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input_path {
            if !input.exists() {
                anyhow::bail!("Input file does not exist: {}", input.display());
            }
            if !input.is_file() {
                anyhow::bail!("Input path is not a file: {}", input.display());
            }
        } else if !self.sample_dir.is_dir() {
            anyhow::bail!("Sample directory does not exist: {}", self.sample_dir.display());
        }

        if let Some(request) = &self.replace {
            if request.search_word.is_empty() {
                anyhow::bail!("Search word must not be empty");
            }
        }

        if self.output_path.as_os_str().is_empty() {
            anyhow::bail!("Output path must not be empty");
        }

        if self.output_is_input()? {
            anyhow::bail!(
                "Output path must differ from the input: {}",
                self.output_path.display()
            );
        }

        if self.reader.buffer_size == 0 {
            anyhow::bail!("Buffer size must be greater than zero");
        }

        Ok(())
    }

    /// True when the output would overwrite the source being indexed
    fn output_is_input(&self) -> Result<bool> {
        let input = self.planned_input_path();
        if self.output_path == input {
            return Ok(true);
        }
        if !self.output_path.exists() || !input.exists() {
            return Ok(false);
        }

        let output = std::fs::canonicalize(&self.output_path)
            .with_context(|| format!("Failed to resolve output path {}", self.output_path.display()))?;
        let input = std::fs::canonicalize(&input)
            .with_context(|| format!("Failed to resolve input path {}", input.display()))?;
        Ok(output == input)
    }

    /// Path the input will be read from once resolved
    pub fn planned_input_path(&self) -> PathBuf {
        match &self.input_path {
            Some(path) => path.clone(),
            None => sample::sample_file_path(&self.sample_dir),
        }
    }

    /// Return the input path, generating the sample file when none was given
    pub async fn resolve_input(&self) -> Result<PathBuf> {
        match &self.input_path {
            Some(path) => Ok(path.clone()),
            None => sample::create_sample_file(&self.sample_dir).await,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
