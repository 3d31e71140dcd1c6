use pol_core::{Annotation, Result};

/// Trait for linguistic annotation backends.
///
/// Implementations tokenize the input, flag stop words and punctuation,
/// attach lemmas and detect named-entity spans. Failures are fatal to the
/// current invocation; callers do not retry.
pub trait Annotator: Send + Sync {
    /// Annotate one text.
    fn annotate(&self, text: &str) -> Result<Annotation>;
}
