//! # Sentiment Module
//!
//! Scoring façade, the collaborator it delegates to, and how results are
//! labeled and interpreted alongside the shape of the text.

mod analyzer;
mod interpret;
mod labels;
mod message;
mod scorer;

pub use analyzer::{SentimentAnalyzer, SentimentResult};
pub use interpret::{BiasSignal, Interpretation, RiskNote, Tone, ToneBreakdown};
pub use message::{shorten, MessagePower, PowerLevel};
pub use labels::{to_indented_json, LabelPreset, OutputFormat, ScoreLabels};
pub use scorer::{PolarityScorer, PolarityScores, VaderScorer};
