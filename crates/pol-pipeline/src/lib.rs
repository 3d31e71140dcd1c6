//! Sentiment pipeline — normalize, reduce, classify.
//!
//! Stages run in strict sequence: raw text goes through the lexical
//! normalizer, the linguistic reducer strips stop words and punctuation
//! while preserving entity surfaces, and the reduced text is handed to an
//! opaque binary classifier. Every stage is pure and synchronous; the whole
//! pipeline is safe to call concurrently from any number of call sites.

pub mod classifier;
pub mod pipeline;
pub mod reducer;

pub use classifier::SentimentClassifier;
pub use pipeline::SentimentPipeline;
pub use reducer::Reducer;
