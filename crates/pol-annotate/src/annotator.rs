//! The rule-based [`Annotator`] implementation.

use crate::entities::detect_entities;
use crate::lemma::lemmatize;
use crate::stopwords::is_stop_word;
use crate::tokenizer::{is_punctuation, tokenize};
use crate::traits::Annotator;
use pol_core::{Annotation, AnnotatorConfig, Result, Token};
use std::collections::HashSet;

/// Rule-based annotation backend: regex tokenizer, static stop-word set,
/// suffix lemmatizer and capitalization/gazetteer entity detection.
#[derive(Debug, Clone, Default)]
pub struct RuleAnnotator {
    extra_stop_words: HashSet<String>,
    gazetteer: HashSet<String>,
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &AnnotatorConfig) -> Self {
        Self {
            extra_stop_words: config
                .extra_stop_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            gazetteer: config.known_entities.iter().cloned().collect(),
        }
    }

    fn is_stop(&self, word: &str) -> bool {
        is_stop_word(word) || self.extra_stop_words.contains(word.to_lowercase().as_str())
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation> {
        let mut tokens = Vec::new();
        for surface in tokenize(text) {
            let token = if is_punctuation(surface) {
                Token::new(surface, surface).punct()
            } else if self.is_stop(surface) {
                Token::new(surface, lemmatize(surface)).stop()
            } else {
                Token::new(surface, lemmatize(surface))
            };
            tokens.push(token);
        }
        let entities = detect_entities(&tokens, &self.gazetteer);
        Ok(Annotation { tokens, entities })
    }
}
