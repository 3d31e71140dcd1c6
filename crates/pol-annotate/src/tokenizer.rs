//! Regex tokenizer over the normalizer's retained character set.

use regex::Regex;
use std::sync::LazyLock;

// Alternatives are tried in order: numeric ranges before bare numbers so
// "10-20" stays one token, words keep internal apostrophes ("don't").
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:-\d+)+|\d+(?:\.\d+)?%?|[a-zA-Z]+(?:'[a-zA-Z]+)*|[.!?;:,]+|[%'-]").unwrap()
});

/// Split text into surface tokens, in order.
pub fn tokenize(text: &str) -> Vec<&str> {
    RE_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// A token is punctuation when it carries no letters or digits.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_ascii_alphanumeric())
}
