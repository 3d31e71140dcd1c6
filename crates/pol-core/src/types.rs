use serde::{Deserialize, Serialize};

/// One unit of annotated text.
///
/// `text` is the surface form exactly as it appeared in the input; `lemma` is
/// the dictionary base form. The two flags classify the token for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            is_stop: false,
            is_punct: false,
        }
    }

    pub fn stop(mut self) -> Self {
        self.is_stop = true;
        self
    }

    pub fn punct(mut self) -> Self {
        self.is_punct = true;
        self
    }
}

/// A contiguous run of tokens recognized as a named entity.
///
/// `start..end` are token indices into the owning [`Annotation`]; `text` is the
/// space-joined surface form, preserved verbatim by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Output of one annotation pass: ordered tokens plus entity spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
}

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Map a raw classifier label to a sentiment. `1` means positive, any
    /// other value is negative — the only contract with the classifier.
    pub fn from_label(label: i8) -> Self {
        if label == 1 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
