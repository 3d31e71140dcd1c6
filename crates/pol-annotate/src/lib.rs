//! Linguistic annotation: tokens, stop-word/punctuation flags, lemmas and
//! named-entity spans.
//!
//! The [`Annotator`] trait is the seam between the reduction logic and the
//! annotation machinery; [`RuleAnnotator`] is the rule-based implementation
//! (regex tokenizer, static stop-word set, suffix lemmatizer, capitalization
//! and gazetteer based entity detection).

pub mod annotator;
pub mod entities;
pub mod lemma;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

pub use annotator::RuleAnnotator;
pub use traits::Annotator;
