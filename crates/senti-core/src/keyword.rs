//! Keyword-count sentiment heuristic.

use crate::{Label, ModelError, ModelInfo, Prediction, SentimentModel};

pub const MODEL_VERSION: &str = "1.0.0";

pub const POSITIVE_WORDS: [&str; 6] = ["好", "棒", "优秀", "喜欢", "满意", "开心"];
pub const NEGATIVE_WORDS: [&str; 6] = ["差", "糟糕", "讨厌", "失望", "难过", "生气"];

/// Labels text by comparing how many positive and negative keywords it contains.
///
/// Each keyword counts once if it appears anywhere in the case-folded text;
/// repeats of the same keyword do not add weight.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    version: String,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self { version: MODEL_VERSION.to_string() }
    }

    pub fn classify(&self, text: &str) -> Label {
        let folded = text.to_lowercase();
        let positive = count_hits(&folded, &POSITIVE_WORDS);
        let negative = count_hits(&folded, &NEGATIVE_WORDS);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Label::Positive,
            std::cmp::Ordering::Less => Label::Negative,
            std::cmp::Ordering::Equal => Label::Neutral,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn count_hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}

impl SentimentModel for KeywordClassifier {
    fn version(&self) -> &str {
        &self.version
    }

    fn predict(&self, text: &str) -> Result<Prediction, ModelError> {
        Ok(self.classify(text).into())
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            model_version: self.version.clone(),
            model_type: "文本情感分析".into(),
            supported_languages: vec!["中文".into(), "英文".into()],
            input_format: "文本字符串".into(),
            output_format: "情感标签 + 置信度".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_words_only() {
        let model = KeywordClassifier::new();
        for word in POSITIVE_WORDS {
            let prediction = model.predict(&format!("这个{word}")).unwrap();
            assert_eq!(prediction.label, Label::Positive, "word {word}");
            assert_eq!(prediction.confidence, 0.8);
        }
    }

    #[test]
    fn test_negative_words_only() {
        let model = KeywordClassifier::new();
        for word in NEGATIVE_WORDS {
            let prediction = model.predict(&format!("真是{word}")).unwrap();
            assert_eq!(prediction.label, Label::Negative, "word {word}");
            assert_eq!(prediction.confidence, 0.7);
        }
    }

    #[test]
    fn test_balanced_or_absent_is_neutral() {
        let model = KeywordClassifier::new();
        assert_eq!(model.classify("hello world"), Label::Neutral);
        assert_eq!(model.classify("今天天气晴朗"), Label::Neutral);
        assert_eq!(model.classify("又好又差"), Label::Neutral);
        assert_eq!(model.predict("hello world").unwrap().confidence, 0.5);
    }

    #[test]
    fn test_reference_scenarios() {
        let model = KeywordClassifier::new();
        assert_eq!(model.classify("这个产品很好很棒"), Label::Positive);
        assert_eq!(model.classify("服务很差，我很失望"), Label::Negative);
        assert_eq!(model.classify("今天天气晴朗"), Label::Neutral);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let model = KeywordClassifier::new();
        // one positive keyword repeated vs two distinct negative keywords
        assert_eq!(model.classify("好好好好，但是差而且失望"), Label::Negative);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let model = KeywordClassifier::new();
        let text = "我很喜欢，但有点难过";
        let first = model.predict(text).unwrap();
        for _ in 0..10 {
            assert_eq!(model.predict(text).unwrap(), first);
        }
    }

    #[test]
    fn test_info_reports_version() {
        let model = KeywordClassifier::default();
        let info = model.info();
        assert_eq!(info.model_version, MODEL_VERSION);
        assert_eq!(model.version(), MODEL_VERSION);
        assert_eq!(info.supported_languages, vec!["中文", "英文"]);
    }
}
