// WHY: ties the line source, tokenizer, index and replacer into the build and replace passes
// The replace pass consults the index only to decide whether to run and what to report

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

pub mod replace;
pub mod tokenizer;

pub use replace::{count_replacements, LineReplacement, WholeWordReplacer};
pub use tokenizer::{clean_word, cleaned_words, tokens};

use crate::reader::{AsyncFileReader, ReaderConfig};
use crate::word_index::WordIndex;
use crate::writer::{AsyncFileWriter, WriteStats};

/// Replacement tally for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number
    pub line_number: usize,
    pub replaced: usize,
}

/// Output of a search-and-replace that found its word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Lines the word was indexed under, in first-seen order
    pub positions: Vec<usize>,
    /// Rewritten lines, one per input line
    pub lines: Vec<String>,
    /// Token-aligned replacement count across all lines
    pub replacement_count: usize,
    /// Exact number of whole-word matches substituted
    pub match_count: usize,
    /// Lines with a non-zero token-aligned count
    pub changes: Vec<LineChange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The word is not in the index; nothing was rewritten
    NotFound,
    Replaced(Replacement),
}

impl ReplaceOutcome {
    pub fn replacement_count(&self) -> usize {
        match self {
            ReplaceOutcome::NotFound => 0,
            ReplaceOutcome::Replaced(replacement) => replacement.replacement_count,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ReplaceOutcome::Replaced(_))
    }
}

/// Builds word indexes from text sources and rewrites sources by whole word
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    reader: AsyncFileReader,
    writer: AsyncFileWriter,
}

impl TextProcessor {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            reader: AsyncFileReader::new(config),
            writer: AsyncFileWriter::new(),
        }
    }

    /// Index every cleaned word of `lines`, numbering lines from 1
    pub fn build_index_from_lines<I, S>(lines: I) -> WordIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = WordIndex::new();
        let mut line_count = 0;

        for (offset, line) in lines.into_iter().enumerate() {
            let line_number = offset + 1;
            for word in cleaned_words(line.as_ref()) {
                index.insert(&word, line_number);
            }
            line_count = line_number;
        }

        debug!("Indexed {} lines, {} unique words", line_count, index.unique_word_count());
        index
    }

    /// Read `source` and index it; read failures return no index
    pub async fn build_index_from_source<P: AsRef<Path>>(&self, source: P) -> Result<WordIndex> {
        let source = source.as_ref();
        info!("Building word index from: {}", source.display());

        let (lines, stats) = self.reader.read_file_lines(source).await?;
        let index = Self::build_index_from_lines(&lines);

        info!(
            "Word index built: {} lines, {} unique words, height {}",
            stats.lines_read,
            index.unique_word_count(),
            index.height()
        );
        Ok(index)
    }

    /// Rewrite `lines` replacing whole-word `search_word` with `replace_word`
    ///
    /// Existence is decided by the index (case-insensitive); the substitution
    /// itself is case-sensitive against the literal line text.
    pub fn replace_lines<I, S>(
        lines: I,
        search_word: &str,
        replace_word: &str,
        index: &WordIndex,
    ) -> Result<ReplaceOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(node) = index.search(search_word) else {
            info!("Word {:?} not found in index", search_word);
            return Ok(ReplaceOutcome::NotFound);
        };
        info!("Found {:?} in lines {:?}", search_word, node.positions());

        let replacer = WholeWordReplacer::new(search_word, replace_word)?;
        let mut output = Vec::new();
        let mut changes = Vec::new();
        let mut replacement_count = 0;
        let mut match_count = 0;

        for (offset, line) in lines.into_iter().enumerate() {
            let result = replacer.replace_line(line.as_ref());
            if result.replaced > 0 {
                debug!("Line {}: replaced {} occurrence(s)", offset + 1, result.replaced);
                changes.push(LineChange {
                    line_number: offset + 1,
                    replaced: result.replaced,
                });
            }
            replacement_count += result.replaced;
            match_count += result.matches;
            output.push(result.line);
        }

        info!(
            "Replaced {:?} with {:?}: {} replacement(s), {} whole-word match(es)",
            search_word, replace_word, replacement_count, match_count
        );

        Ok(ReplaceOutcome::Replaced(Replacement {
            positions: node.positions().to_vec(),
            lines: output,
            replacement_count,
            match_count,
            changes,
        }))
    }

    /// Re-read `source` and rewrite it; a miss returns before reading
    pub async fn search_and_replace<P: AsRef<Path>>(
        &self,
        source: P,
        search_word: &str,
        replace_word: &str,
        index: &WordIndex,
    ) -> Result<ReplaceOutcome> {
        if !index.contains(search_word) {
            info!("Word {:?} not found in index", search_word);
            return Ok(ReplaceOutcome::NotFound);
        }

        let (lines, _stats) = self.reader.read_file_lines(source.as_ref()).await?;
        Self::replace_lines(&lines, search_word, replace_word, index)
    }

    /// Write output lines to `sink`, one terminator per line
    pub async fn write_output<P, S>(&self, sink: P, lines: &[S]) -> Result<WriteStats>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        self.writer.write_lines(sink, lines).await
    }
}
