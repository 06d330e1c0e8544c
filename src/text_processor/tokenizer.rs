// WHY: one place defines what a token and an index key are, shared by build and replace

/// Split a line into raw tokens on runs of whitespace
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Strip everything except ASCII letters and digits, then lowercase
pub fn clean_word(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Cleaned, non-empty words of a line in order of appearance
pub fn cleaned_words(line: &str) -> impl Iterator<Item = String> + '_ {
    tokens(line).map(clean_word).filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_split_on_whitespace_runs() {
        let tokens: Vec<&str> = tokens("  hello \t world,\tagain  ").collect();
        assert_eq!(tokens, vec!["hello", "world,", "again"]);
    }

    #[test]
    fn test_clean_word_strips_punctuation() {
        assert_eq!(clean_word("Hello,"), "hello");
        assert_eq!(clean_word("\"don't\""), "dont");
        assert_eq!(clean_word("e-mail"), "email");
        assert_eq!(clean_word("R2D2!"), "r2d2");
        assert_eq!(clean_word("..."), "");
    }

    #[test]
    fn test_clean_word_drops_non_ascii() {
        assert_eq!(clean_word("café"), "caf");
        assert_eq!(clean_word("世界"), "");
    }

    #[test]
    fn test_cleaned_words_skip_empty() {
        let words: Vec<String> = cleaned_words("Hello -- World ... 42!").collect();
        assert_eq!(words, vec!["hello", "world", "42"]);
    }

    #[test]
    fn test_cleaned_words_blank_line() {
        assert_eq!(cleaned_words("   ").count(), 0);
        assert_eq!(cleaned_words("?! ;").count(), 0);
    }
}
