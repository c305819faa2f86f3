//! # Score Labels
//!
//! Presentation of a [`SentimentResult`]: which names the four scores are
//! printed under, and in which format.

use super::analyzer::SentimentResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Built-in label sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelPreset {
    /// English field names (`negative_score`, ...)
    #[default]
    Semantic,
    /// Turkish field names used by the original web client (`negatif_skor`, ...)
    Original,
}

/// Names the four scores are presented under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLabels {
    pub negative: String,
    pub neutral: String,
    pub positive: String,
    pub compound: String,
}

impl Default for ScoreLabels {
    fn default() -> Self {
        Self::semantic()
    }
}

impl From<LabelPreset> for ScoreLabels {
    fn from(preset: LabelPreset) -> Self {
        match preset {
            LabelPreset::Semantic => Self::semantic(),
            LabelPreset::Original => Self::original(),
        }
    }
}

impl ScoreLabels {
    pub fn semantic() -> Self {
        Self {
            negative: "negative_score".to_string(),
            neutral: "neutral_score".to_string(),
            positive: "positive_score".to_string(),
            compound: "compound_score".to_string(),
        }
    }

    pub fn original() -> Self {
        Self {
            negative: "negatif_skor".to_string(),
            neutral: "nötr_skor".to_string(),
            positive: "pozitif_skor".to_string(),
            compound: "bileşik_skor".to_string(),
        }
    }

    /// Label/value pairs in presentation order
    pub fn pairs(&self, result: &SentimentResult) -> [(&str, f64); 4] {
        [
            (self.negative.as_str(), result.negative_score),
            (self.neutral.as_str(), result.neutral_score),
            (self.positive.as_str(), result.positive_score),
            (self.compound.as_str(), result.compound_score),
        ]
    }

    /// Labeled JSON object, keys in presentation order
    pub fn to_json(&self, result: &SentimentResult) -> Value {
        let map: Map<String, Value> = self
            .pairs(result)
            .into_iter()
            .map(|(label, value)| (label.to_string(), Value::from(value)))
            .collect();
        Value::Object(map)
    }
}

/// How a labeled result is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON with a 4-space indent
    #[default]
    Json,
    /// One `label: value` line per score
    Text,
}

impl OutputFormat {
    /// Render a result under the given labels
    pub fn render(&self, labels: &ScoreLabels, result: &SentimentResult) -> String {
        match self {
            OutputFormat::Json => to_indented_json(&labels.to_json(result)),
            OutputFormat::Text => labels
                .pairs(result)
                .iter()
                .map(|(label, value)| format!("{}: {:.3}", label, value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Pretty JSON with a 4-space indent
pub fn to_indented_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    // Writing a Value into a Vec cannot fail
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => value.to_string(),
    }
}
