use super::types::FrequencyTable;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lowercases `text` and returns every maximal run of word characters
/// (letters, digits, underscore) in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Counts the tokens of `text` into a fresh table.
pub fn count_tokens(text: &str) -> FrequencyTable {
    tokenize(text).into_iter().collect()
}
