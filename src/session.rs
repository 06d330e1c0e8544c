// WHY: one session owns one source and the index built from it
// Replaced output never feeds back into the index; statistics keep describing the original source

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::text_processor::{ReplaceOutcome, TextProcessor};
use crate::word_index::WordIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Empty,
    Indexed,
    Replaced,
}

/// Build-then-replace workflow over a single text source
#[derive(Debug, Default)]
pub struct Session {
    processor: TextProcessor,
    source: Option<PathBuf>,
    index: Option<WordIndex>,
    state: SessionState,
}

impl Session {
    pub fn new(processor: TextProcessor) -> Self {
        Self {
            processor,
            ..Default::default()
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn index(&self) -> Option<&WordIndex> {
        self.index.as_ref()
    }

    /// Index `source`, replacing any previous index
    ///
    /// On failure the session returns to `Empty`.
    pub async fn build<P: AsRef<Path>>(&mut self, source: P) -> Result<&WordIndex> {
        let source = source.as_ref();
        self.index = None;
        self.source = None;
        self.state = SessionState::Empty;

        let index = self.processor.build_index_from_source(source).await?;
        self.source = Some(source.to_path_buf());
        self.state = SessionState::Indexed;
        info!("Session indexed {}", source.display());
        Ok(self.index.insert(index))
    }

    /// Search the indexed source and write the rewritten lines to `output`
    ///
    /// A miss leaves the state unchanged and writes nothing.
    pub async fn search_and_replace<P: AsRef<Path>>(
        &mut self,
        search_word: &str,
        replace_word: &str,
        output: P,
    ) -> Result<ReplaceOutcome> {
        let (Some(source), Some(index)) = (&self.source, &self.index) else {
            anyhow::bail!("No index built; build the session before search and replace");
        };

        let outcome = self
            .processor
            .search_and_replace(source, search_word, replace_word, index)
            .await?;

        match &outcome {
            ReplaceOutcome::NotFound => {
                warn!("Word {:?} not found; no output written", search_word);
            }
            ReplaceOutcome::Replaced(replacement) => {
                self.processor.write_output(output.as_ref(), &replacement.lines).await?;
                self.state = SessionState::Replaced;
                info!("Modified content saved to: {}", output.as_ref().display());
            }
        }

        Ok(outcome)
    }
}
