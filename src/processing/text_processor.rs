//! Tokenization for the lexical scorer

use regex::Regex;

pub struct TextProcessor {
    term_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        // Two or more word characters, the usual TF-IDF vectorizer token pattern
        let term_regex = Regex::new(r"\b\w\w+\b").expect("Invalid term regex");

        Self { term_regex }
    }

    /// Lowercased vocabulary terms for TF-IDF. Single-character words are dropped.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.term_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}
