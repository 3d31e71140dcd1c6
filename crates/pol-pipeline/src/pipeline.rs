//! End-to-end orchestration of the pipeline stages.

use crate::classifier::SentimentClassifier;
use crate::reducer::Reducer;
use pol_annotate::Annotator;
use pol_core::{Result, Sentiment};
use pol_normalizer::normalize;
use tracing::debug;

/// The full sentiment pipeline: normalize, reduce, classify.
pub struct SentimentPipeline<A, C> {
    reducer: Reducer<A>,
    classifier: C,
}

impl<A: Annotator, C: SentimentClassifier> SentimentPipeline<A, C> {
    pub fn new(annotator: A, classifier: C) -> Self {
        Self {
            reducer: Reducer::new(annotator),
            classifier,
        }
    }

    /// Normalize and reduce one text. An empty result is valid and passed
    /// through to the classifier as-is.
    pub fn preprocess(&self, text: &str) -> Result<String> {
        let cleaned = normalize(text);
        debug!(raw_len = text.len(), cleaned_len = cleaned.len(), "normalized");
        let reduced = self.reducer.reduce(&cleaned)?;
        debug!(reduced_len = reduced.len(), "reduced");
        Ok(reduced)
    }

    /// Preprocess a batch of texts, preserving order.
    pub fn preprocess_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<String>> {
        texts.iter().map(|t| self.preprocess(t.as_ref())).collect()
    }

    /// Run the whole pipeline and map the raw label to a sentiment.
    pub fn predict(&self, text: &str) -> Result<Sentiment> {
        let reduced = self.preprocess(text)?;
        let label = self.classifier.predict(&reduced)?;
        let sentiment = Sentiment::from_label(label);
        debug!(label, %sentiment, "classified");
        Ok(sentiment)
    }
}
