use serde::{Deserialize, Serialize};

use senti_core::{Label, Prediction};

// === Service DTOs ===

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "欢迎使用AI Web应用API";

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub predict: &'static str,
    pub model_info: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

// === Prediction DTOs ===

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

impl PredictRequest {
    /// True when the text holds nothing but whitespace. The ASCII
    /// information separators (U+001C..=U+001F) count as whitespace too,
    /// as they do for the clients this API was written against.
    pub fn is_blank(&self) -> bool {
        self.text
            .chars()
            .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Label,
    pub confidence: f64,
    pub model_version: String,
}

impl PredictResponse {
    pub fn new(prediction: Prediction, model_version: &str) -> Self {
        Self {
            prediction: prediction.label,
            confidence: prediction.confidence,
            model_version: model_version.to_string(),
        }
    }
}

// === Errors ===

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(text: &str) -> PredictRequest {
        PredictRequest { text: text.to_string() }
    }

    #[test]
    fn test_is_blank() {
        assert!(req("").is_blank());
        assert!(req(" \t\r\n").is_blank());
        assert!(req("\u{1c}\u{1d}\u{1e}\u{1f}").is_blank());
        assert!(req("\u{85}\u{a0}\u{3000}").is_blank());
        assert!(!req(" 好 ").is_blank());
        assert!(!req("\u{1b}").is_blank());
    }
}
