// WHY: line-level substitution is independent of the index; the index only gates whether it runs

use anyhow::{Context, Result};
use regex_automata::meta::Regex;

use super::tokenizer::tokens;

/// Result of rewriting a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReplacement {
    pub line: String,
    /// Token-aligned count, see [`count_replacements`]
    pub replaced: usize,
    /// Exact number of whole-word matches substituted
    pub matches: usize,
}

/// Whole-word, case-sensitive literal replacement of one word by another
#[derive(Debug)]
pub struct WholeWordReplacer {
    regex: Regex,
    search_word: String,
    replace_word: String,
}

impl WholeWordReplacer {
    /// Build a replacer; both words are taken literally
    pub fn new(search_word: &str, replace_word: &str) -> Result<Self> {
        let pattern = format!(r"\b{}\b", regex_syntax::escape(search_word));
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to build whole-word matcher for {search_word:?}"))?;

        Ok(Self {
            regex,
            search_word: search_word.to_string(),
            replace_word: replace_word.to_string(),
        })
    }

    /// Replace every whole-word occurrence in `line`
    pub fn replace_line(&self, line: &str) -> LineReplacement {
        let mut output = String::with_capacity(line.len());
        let mut last_end = 0;
        let mut matches = 0;

        for found in self.regex.find_iter(line) {
            output.push_str(&line[last_end..found.start()]);
            output.push_str(&self.replace_word);
            last_end = found.end();
            matches += 1;
        }

        if matches == 0 {
            return LineReplacement {
                line: line.to_string(),
                replaced: 0,
                matches: 0,
            };
        }

        output.push_str(&line[last_end..]);
        let replaced = count_replacements(line, &output, &self.search_word);
        LineReplacement {
            line: output,
            replaced,
            matches,
        }
    }
}

/// Count aligned whitespace tokens that equal `search_word` in `original`
/// and differ in `modified`
///
/// This is the historical count reported to users. It compares tokens by
/// position only, so it misses occurrences glued to punctuation (`hello,`)
/// and drifts once a replacement changes the token count of a line. The
/// exact figure is [`LineReplacement::matches`].
pub fn count_replacements(original: &str, modified: &str, search_word: &str) -> usize {
    tokens(original)
        .zip(tokens(modified))
        .filter(|(before, after)| before != after && *before == search_word)
        .count()
}
