//! Core domain types and the sentiment model seam for senti.
//!
//! - [`Label`]: the closed set of sentiment outcomes
//! - [`Prediction`]: a label paired with its confidence
//! - [`SentimentModel`]: the trait the HTTP layer talks to
//! - [`KeywordClassifier`]: the keyword-count heuristic
//!
//! # Example
//!
//! ```rust
//! use senti_core::{KeywordClassifier, Label, SentimentModel};
//!
//! let model = KeywordClassifier::new();
//! let prediction = model.predict("这个产品很好很棒").unwrap();
//! assert_eq!(prediction.label, Label::Positive);
//! assert_eq!(prediction.confidence, 0.8);
//! ```

mod keyword;

pub use keyword::{KeywordClassifier, MODEL_VERSION, NEGATIVE_WORDS, POSITIVE_WORDS};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a sentiment model can raise while predicting.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The model could not score the input.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Sentiment outcome. Serialized with the labels clients expect on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "正面")]
    Positive,
    #[serde(rename = "负面")]
    Negative,
    #[serde(rename = "中性")]
    Neutral,
}

impl Label {
    /// Fixed confidence reported for this label.
    pub fn confidence(self) -> f64 {
        match self {
            Label::Positive => 0.8,
            Label::Negative => 0.7,
            Label::Neutral => 0.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "正面",
            Label::Negative => "负面",
            Label::Neutral => "中性",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label together with the confidence attached to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    pub confidence: f64,
}

impl From<Label> for Prediction {
    fn from(label: Label) -> Self {
        Self { label, confidence: label.confidence() }
    }
}

/// Descriptive metadata about a model, served by `/model-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_version: String,
    pub model_type: String,
    pub supported_languages: Vec<String>,
    pub input_format: String,
    pub output_format: String,
}

/// A text sentiment model shared read-only across requests.
pub trait SentimentModel: Send + Sync {
    /// Revision string reported with every prediction.
    fn version(&self) -> &str;

    /// Classifies `text`. Callers reject blank input before getting here.
    fn predict(&self, text: &str) -> Result<Prediction, ModelError>;

    fn info(&self) -> ModelInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_confidence_is_fixed_per_label() {
        assert_eq!(Label::Positive.confidence(), 0.8);
        assert_eq!(Label::Negative.confidence(), 0.7);
        assert_eq!(Label::Neutral.confidence(), 0.5);
    }

    #[test]
    fn test_label_wire_names() {
        assert_eq!(serde_json::to_string(&Label::Positive).unwrap(), "\"正面\"");
        assert_eq!(serde_json::to_string(&Label::Negative).unwrap(), "\"负面\"");
        assert_eq!(serde_json::to_string(&Label::Neutral).unwrap(), "\"中性\"");
        assert_eq!(Label::Negative.to_string(), "负面");
    }

    #[test]
    fn test_prediction_from_label() {
        let prediction = Prediction::from(Label::Negative);
        assert_eq!(prediction.label, Label::Negative);
        assert_eq!(prediction.confidence, 0.7);
    }
}
