//! The classifier seam.
//!
//! The pipeline treats the classifier as an opaque function from reduced
//! text to a raw label; `1` means positive, anything else negative. Training,
//! evaluation and model persistence live with the external collaborator.

use pol_core::Result;

/// Opaque binary sentiment classifier.
pub trait SentimentClassifier: Send + Sync {
    /// Raw label for one reduced text.
    fn predict(&self, text: &str) -> Result<i8>;
}

/// Any infallible `Fn(&str) -> i8` closure works as a classifier.
impl<F> SentimentClassifier for F
where
    F: Fn(&str) -> i8 + Send + Sync,
{
    fn predict(&self, text: &str) -> Result<i8> {
        Ok(self(text))
    }
}
