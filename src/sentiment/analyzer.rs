//! # Sentiment Analyzer
//!
//! Relabels a scorer's raw output onto [`SentimentResult`].

use super::scorer::{PolarityScorer, PolarityScores, VaderScorer};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sentiment scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Negative proportion (0 to 1)
    pub negative_score: f64,
    /// Neutral proportion (0 to 1)
    pub neutral_score: f64,
    /// Positive proportion (0 to 1)
    pub positive_score: f64,
    /// Overall polarity (-1 to 1), independent of the other three
    pub compound_score: f64,
}

impl From<PolarityScores> for SentimentResult {
    fn from(scores: PolarityScores) -> Self {
        Self {
            negative_score: scores.neg,
            neutral_score: scores.neu,
            positive_score: scores.pos,
            compound_score: scores.compound,
        }
    }
}

impl SentimentResult {
    /// Sum of the three proportion scores, close to 1.0 for a well-behaved scorer
    pub fn proportion_sum(&self) -> f64 {
        self.negative_score + self.neutral_score + self.positive_score
    }
}

/// Sentiment analyzer over a pluggable scorer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<S = VaderScorer> {
    scorer: S,
}

impl Default for SentimentAnalyzer<VaderScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer<VaderScorer> {
    /// Create an analyzer backed by VADER
    pub fn new() -> Self {
        Self {
            scorer: VaderScorer::new(),
        }
    }
}

impl<S: PolarityScorer> SentimentAnalyzer<S> {
    /// Create an analyzer backed by a custom scorer
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score a text and relabel the result.
    ///
    /// The text goes to the scorer untouched and scorer errors are returned as is.
    pub fn analyze(&self, text: &str) -> Result<SentimentResult> {
        debug!(
            scorer = self.scorer.name(),
            chars = text.chars().count(),
            "scoring text"
        );

        let scores = self.scorer.score(text)?;
        Ok(SentimentResult::from(scores))
    }

    /// Get scorer name
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use std::sync::Mutex;

    /// Scorer that returns fixed scores and remembers what it was given
    struct FixedScorer {
        scores: PolarityScores,
        seen: Mutex<Vec<String>>,
    }

    impl FixedScorer {
        fn new(scores: PolarityScores) -> Self {
            Self {
                scores,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl PolarityScorer for FixedScorer {
        fn score(&self, text: &str) -> Result<PolarityScores> {
            self.seen.lock().unwrap().push(text.to_string());
            Ok(self.scores)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn score(&self, _text: &str) -> Result<PolarityScores> {
            Err(AnalysisError::Collaborator {
                scorer: "failing".to_string(),
                message: "cannot tokenize".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_relabel_is_one_to_one() {
        let scores = PolarityScores {
            neg: 0.123,
            neu: 0.456,
            pos: 0.421,
            compound: -0.789,
        };
        let analyzer = SentimentAnalyzer::with_scorer(FixedScorer::new(scores));
        let result = analyzer.analyze("anything").unwrap();

        assert_eq!(result.negative_score, 0.123);
        assert_eq!(result.neutral_score, 0.456);
        assert_eq!(result.positive_score, 0.421);
        assert_eq!(result.compound_score, -0.789);
    }

    #[test]
    fn test_no_renormalization() {
        // Off-balance proportions pass through untouched
        let scores = PolarityScores {
            neg: 0.5,
            neu: 0.5,
            pos: 0.5,
            compound: 0.0,
        };
        let analyzer = SentimentAnalyzer::with_scorer(FixedScorer::new(scores));
        let result = analyzer.analyze("x").unwrap();

        assert_eq!(result.proportion_sum(), 1.5);
    }

    #[test]
    fn test_text_passed_through_unchanged() {
        let scorer = FixedScorer::new(PolarityScores::NEUTRAL);
        let analyzer = SentimentAnalyzer::with_scorer(scorer);

        analyzer.analyze("").unwrap();
        analyzer.analyze("  padded  ").unwrap();

        let seen = analyzer.scorer.seen.lock().unwrap();
        assert_eq!(*seen, vec!["".to_string(), "  padded  ".to_string()]);
    }

    #[test]
    fn test_scorer_error_propagates() {
        let analyzer = SentimentAnalyzer::with_scorer(FailingScorer);
        let err = analyzer.analyze("text").unwrap_err();

        assert_eq!(
            err,
            AnalysisError::Collaborator {
                scorer: "failing".to_string(),
                message: "cannot tokenize".to_string(),
            }
        );
    }

    #[test]
    fn test_default_scorer() {
        let analyzer = SentimentAnalyzer::default();
        assert_eq!(analyzer.scorer_name(), "vader");
    }

    #[test]
    fn test_result_serializes_with_semantic_names() {
        let result = SentimentResult::from(PolarityScores::NEUTRAL);
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["negative_score"], 0.0);
        assert_eq!(json["neutral_score"], 1.0);
        assert_eq!(json["positive_score"], 0.0);
        assert_eq!(json["compound_score"], 0.0);
    }
}
