use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolarityConfig {
    pub annotator: AnnotatorConfig,
}

/// Tuning knobs for the rule-based annotator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Stop words added on top of the built-in English set.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    /// Surface forms always treated as named entities (exact match).
    #[serde(default)]
    pub known_entities: Vec<String>,
}

impl AnnotatorConfig {
    pub fn with_entities<I, S>(entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_entities: entities.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: PolarityConfig = serde_json::from_str(r#"{"annotator":{}}"#).unwrap();
        assert!(config.annotator.extra_stop_words.is_empty());
        assert!(config.annotator.known_entities.is_empty());
    }

    #[test]
    fn test_with_entities() {
        let config = AnnotatorConfig::with_entities(["Apple", "iPhone"]);
        assert_eq!(config.known_entities, vec!["Apple", "iPhone"]);
        assert!(config.extra_stop_words.is_empty());
    }
}
