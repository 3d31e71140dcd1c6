//! Linguistic reducer — annotation-driven token filtering.

use pol_annotate::Annotator;
use pol_core::{EntitySpan, Result};
use std::collections::HashMap;

/// Reduces text to a space-joined sequence of content tokens: entities kept
/// verbatim, everything else lemmatized and lowercased.
#[derive(Debug, Clone)]
pub struct Reducer<A> {
    annotator: A,
}

impl<A: Annotator> Reducer<A> {
    pub fn new(annotator: A) -> Self {
        Self { annotator }
    }

    /// Annotate `text` and emit the surviving tokens in original order.
    ///
    /// The stop/punctuation skip runs before the entity lookup, so a token
    /// flagged as a stop word is dropped even when its surface text matches
    /// an entity span elsewhere in the text.
    pub fn reduce(&self, text: &str) -> Result<String> {
        let annotation = self.annotator.annotate(text)?;
        let entities: HashMap<&str, &EntitySpan> = annotation
            .entities
            .iter()
            .map(|e| (e.text.as_str(), e))
            .collect();

        let mut kept = Vec::new();
        for token in &annotation.tokens {
            if token.is_stop || token.is_punct {
                continue;
            }
            if entities.contains_key(token.text.as_str()) {
                kept.push(token.text.clone());
            } else {
                kept.push(token.lemma.to_lowercase());
            }
        }
        Ok(kept.join(" "))
    }
}
