//! # Zenith Sentiment
//!
//! Labeled sentiment scores for a piece of text. Scoring is delegated to the
//! VADER lexicon-and-rule model; this crate relabels its four raw scores
//! (`neg`, `neu`, `pos`, `compound`) onto [`SentimentResult`].
//!
//! ## Modules
//!
//! - `sentiment` - Scoring façade, scorers, labels and interpretation
//! - `error` - Error types
//! - `utils` - Configuration and logging
//!
//! ## Example Usage
//!
//! ```no_run
//! use zenith_sentiment::analyze_sentiment;
//!
//! fn main() -> zenith_sentiment::Result<()> {
//!     let result = analyze_sentiment("This is wonderful, amazing, and great news!")?;
//!     println!("compound: {:.3}", result.compound_score);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use error::{AnalysisError, Result};
pub use sentiment::{
    BiasSignal, Interpretation, LabelPreset, MessagePower, OutputFormat, PolarityScorer,
    PolarityScores, PowerLevel, RiskNote, ScoreLabels, SentimentAnalyzer, SentimentResult, Tone,
    ToneBreakdown, VaderScorer,
};
pub use utils::{AppConfig, ConfigError};

/// Text analyzed by the command-line demonstration
pub const DEMO_TEXT: &str = "The idea of putting all my money into this stock both excites me \
and makes me panic. If it drops, I'm ruined.";

/// Score a text with VADER and return the relabeled scores.
///
/// The text is passed to the scorer as is, empty or whitespace-only included.
/// Every call is independent of the ones before it.
pub fn analyze_sentiment(text: &str) -> Result<SentimentResult> {
    SentimentAnalyzer::new().analyze(text)
}
