// WHY: all console text and the stats record are rendered here so the core stays free of printing

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::session::SessionState;
use crate::text_processor::ReplaceOutcome;
use crate::word_index::WordIndex;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn format_positions(positions: &[usize]) -> String {
    let joined: Vec<String> = positions.iter().map(usize::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Join rows into a block, each row ending in a newline
fn render(rows: Vec<String>) -> String {
    let mut out = rows.join("\n");
    out.push('\n');
    out
}

/// Sorted listing of every indexed word with its lines
pub fn format_word_listing(index: &WordIndex) -> String {
    let mut rows = vec!["Unique Words in File (Sorted Alphabetically):".to_string(), rule()];
    rows.extend(
        index
            .iter()
            .map(|(word, positions)| format!("{:<15} : Appears in lines {}", word, format_positions(positions))),
    );
    render(rows)
}

pub fn format_statistics(index: &WordIndex) -> String {
    render(vec![
        "File Statistics:".to_string(),
        rule(),
        format!("Total unique words: {}", index.unique_word_count()),
        format!("Tree height: {}", index.height()),
    ])
}

/// File content with right-aligned 1-based line numbers
pub fn format_numbered_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut rows = vec![rule()];
    rows.extend(
        lines
            .iter()
            .enumerate()
            .map(|(offset, line)| format!("{:>2}: {}", offset + 1, line.as_ref())),
    );
    rows.push(rule());
    render(rows)
}

/// Summary of one search-and-replace
pub fn format_replacement(search_word: &str, replace_word: &str, outcome: &ReplaceOutcome) -> String {
    let mut rows = vec![
        format!("Searching for: \"{search_word}\""),
        format!("Replacing with: \"{replace_word}\""),
    ];

    match outcome {
        ReplaceOutcome::NotFound => {
            rows.push(format!("Word \"{search_word}\" not found in file!"));
        }
        ReplaceOutcome::Replaced(replacement) => {
            rows.push(format!(
                "Found \"{}\" in lines: {}",
                search_word,
                format_positions(&replacement.positions)
            ));
            rows.extend(replacement.changes.iter().map(|change| {
                format!("   Line {}: Replaced {} occurrence(s)", change.line_number, change.replaced)
            }));
            rows.push(format!("Total replacements made: {}", replacement.replacement_count));
            if replacement.match_count != replacement.replacement_count {
                rows.push(format!("Whole-word matches substituted: {}", replacement.match_count));
            }
        }
    }
    render(rows)
}

/// Machine-readable summary of a run
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    pub input_path: String,
    pub lines_indexed: usize,
    pub unique_words: usize,
    pub tree_height: usize,
    pub build_time_ms: u64,
    pub search_word: Option<String>,
    pub replace_word: Option<String>,
    pub found: bool,
    pub positions: Vec<usize>,
    pub replacement_count: usize,
    pub match_count: usize,
    pub output_path: Option<String>,
    pub final_state: SessionState,
}

impl RunStats {
    /// Stats for an index-only run
    pub fn for_index(input_path: &Path, lines_indexed: usize, index: &WordIndex, build_time_ms: u64) -> Self {
        Self {
            input_path: input_path.display().to_string(),
            lines_indexed,
            unique_words: index.unique_word_count(),
            tree_height: index.height(),
            build_time_ms,
            search_word: None,
            replace_word: None,
            found: false,
            positions: Vec::new(),
            replacement_count: 0,
            match_count: 0,
            output_path: None,
            final_state: SessionState::Indexed,
        }
    }

    /// Fold a replace result into the stats
    pub fn record_replace(
        &mut self,
        search_word: &str,
        replace_word: &str,
        outcome: &ReplaceOutcome,
        output_path: &Path,
        final_state: SessionState,
    ) {
        self.search_word = Some(search_word.to_string());
        self.replace_word = Some(replace_word.to_string());
        self.final_state = final_state;
        if let ReplaceOutcome::Replaced(replacement) = outcome {
            self.found = true;
            self.positions = replacement.positions.clone();
            self.replacement_count = replacement.replacement_count;
            self.match_count = replacement.match_count;
            self.output_path = Some(output_path.display().to_string());
        }
    }

    /// Write the stats as pretty JSON
    pub async fn write_json(&self, path: &Path) -> Result<PathBuf> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", path.display()))?;
        Ok(path.to_path_buf())
    }
}
