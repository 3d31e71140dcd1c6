use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolError {
    #[error("Annotation failed: {0}")]
    Annotation(String),
    #[error("Classifier error: {0}")]
    Classifier(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PolError>;
