//! # Polarity Scorers
//!
//! The scoring collaborator behind the façade. Anything that can turn a text
//! into `neg`/`neu`/`pos`/`compound` scores implements [`PolarityScorer`];
//! [`VaderScorer`] is the default, backed by the `vader_sentiment` crate.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Raw scores as reported by a collaborator, before relabeling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Negative proportion (0 to 1)
    pub neg: f64,
    /// Neutral proportion (0 to 1)
    pub neu: f64,
    /// Positive proportion (0 to 1)
    pub pos: f64,
    /// Normalized overall polarity (-1 to 1)
    pub compound: f64,
}

impl PolarityScores {
    /// Scores reported for text that carries no sentiment at all
    pub const NEUTRAL: PolarityScores = PolarityScores {
        neg: 0.0,
        neu: 1.0,
        pos: 0.0,
        compound: 0.0,
    };
}

/// A sentiment scoring capability
pub trait PolarityScorer: Send + Sync {
    /// Score a single text
    fn score(&self, text: &str) -> Result<PolarityScores>;

    /// Scorer name, used in logs and error messages
    fn name(&self) -> &str;
}

/// VADER lexicon-and-rule scorer.
///
/// Stateless: a fresh `SentimentIntensityAnalyzer` is built for every call and
/// the lexicon it reads is static, so one instance can be shared across threads.
/// Raw scores pass through as-is, except VADER's 0/0/0/0 for text without
/// scorable tokens, which is reported as [`PolarityScores::NEUTRAL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    const NAME: &'static str = "vader";

    pub fn new() -> Self {
        Self
    }

    fn field(&self, scores: &HashMap<&str, f64>, key: &str) -> Result<f64> {
        scores
            .get(key)
            .copied()
            .ok_or_else(|| AnalysisError::MissingScore {
                scorer: Self::NAME.to_string(),
                field: key.to_string(),
            })
    }
}

impl PolarityScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<PolarityScores> {
        let analyzer = SentimentIntensityAnalyzer::new();

        let raw = guarded(Self::NAME, || analyzer.polarity_scores(text))?;

        let scores = PolarityScores {
            neg: self.field(&raw, "neg")?,
            neu: self.field(&raw, "neu")?,
            pos: self.field(&raw, "pos")?,
            compound: self.field(&raw, "compound")?,
        };

        // VADER reports 0/0/0/0 when no token survives tokenization
        if scores.neg == 0.0 && scores.neu == 0.0 && scores.pos == 0.0 {
            debug!(chars = text.chars().count(), "no scorable tokens, reporting neutral");
            return Ok(PolarityScores {
                compound: scores.compound,
                ..PolarityScores::NEUTRAL
            });
        }

        Ok(scores)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Run a collaborator call, turning a panic into [`AnalysisError::Collaborator`]
fn guarded<T>(scorer: &str, f: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| AnalysisError::Collaborator {
        scorer: scorer.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vader_positive() {
        let scores = VaderScorer::new().score("What a great and lovely day!").unwrap();
        assert!(scores.pos > scores.neg);
        assert!(scores.compound > 0.0);
    }

    #[test]
    fn test_vader_negative() {
        let scores = VaderScorer::new().score("This is a horrible, sad failure.").unwrap();
        assert!(scores.neg > scores.pos);
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let scores = VaderScorer::new().score("").unwrap();
        assert_eq!(scores, PolarityScores::NEUTRAL);
    }

    #[test]
    fn test_whitespace_text_is_neutral() {
        let scores = VaderScorer::new().score("   \n\t ").unwrap();
        assert_eq!(scores, PolarityScores::NEUTRAL);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("lexicon missing");
        assert_eq!(panic_message(payload.as_ref()), "lexicon missing");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bad token"));
        assert_eq!(panic_message(payload.as_ref()), "bad token");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn test_guarded_passes_value_through() {
        assert_eq!(guarded("vader", || 7), Ok(7));
    }

    #[test]
    fn test_guarded_reports_panic_as_collaborator_error() {
        let err = guarded("vader", || -> f64 { panic!("lexicon unavailable") }).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Collaborator {
                scorer: "vader".to_string(),
                message: "lexicon unavailable".to_string(),
            }
        );
        assert_eq!(err.to_string(), "vader scorer failed: lexicon unavailable");
    }

    #[test]
    fn test_scorer_name() {
        assert_eq!(VaderScorer::new().name(), "vader");
    }
}
