//! Named-entity detection over annotated tokens.
//!
//! Rule-based: a token opens or extends an entity span when it is listed in
//! the gazetteer, is mixed-case (`iPhone`), is an all-caps acronym, or is
//! capitalized away from a sentence start. Consecutive matches merge into a
//! single span whose surface text is preserved verbatim downstream.

use pol_core::{EntitySpan, Token};
use std::collections::HashSet;

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let rest: Vec<char> = chars.collect();
            !rest.is_empty() && rest.iter().all(|c| c.is_ascii_lowercase())
        }
        _ => false,
    }
}

fn is_mixed_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.any(|c| c.is_ascii_uppercase()),
        _ => false,
    }
}

fn is_acronym(word: &str) -> bool {
    word.len() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
}

fn is_candidate(token: &Token, at_sentence_start: bool, gazetteer: &HashSet<String>) -> bool {
    if gazetteer.contains(&token.text) {
        return true;
    }
    if token.is_stop {
        return false;
    }
    if is_mixed_case(&token.text) || is_acronym(&token.text) {
        return true;
    }
    !at_sentence_start && is_capitalized(&token.text)
}

/// Detect entity spans over the token sequence.
///
/// A capitalized word at sentence start is only an entity when the gazetteer
/// says so; capitalization alone cannot tell a name from an ordinary opener.
pub fn detect_entities(tokens: &[Token], gazetteer: &HashSet<String>) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut sentence_start = true;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        if token.is_punct {
            if token.text.contains(['.', '!', '?']) {
                sentence_start = true;
            }
            i += 1;
            continue;
        }
        if is_candidate(token, sentence_start, gazetteer) {
            let start = i;
            let mut end = i + 1;
            while end < tokens.len()
                && !tokens[end].is_punct
                && is_candidate(&tokens[end], false, gazetteer)
            {
                end += 1;
            }
            let text = tokens[start..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            spans.push(EntitySpan { text, start, end });
            i = end;
        } else {
            i += 1;
        }
        sentence_start = false;
    }

    spans
}
