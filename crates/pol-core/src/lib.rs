pub mod config;
pub mod error;
pub mod types;

pub use config::{AnnotatorConfig, PolarityConfig};
pub use error::{PolError, Result};
pub use types::{Annotation, EntitySpan, Sentiment, Token};
