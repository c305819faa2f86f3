//! # Interpretation
//!
//! Plain-language reading of a [`SentimentResult`]: overall tone, emotional
//! bias signals, a short risk note and the message's power. None of this
//! feeds back into the scores.

use super::analyzer::SentimentResult;
use super::message::{shorten, MessagePower};
use serde::{Deserialize, Serialize};

/// Compound score at or beyond which a tone stops being neutral
pub const TONE_THRESHOLD: f64 = 0.05;

/// Compound score at or beyond which euphoria / panic is signalled
pub const BIAS_THRESHOLD: f64 = 0.2;

/// Proportion at or beyond which one side dominates the text
pub const DOMINANT_PROPORTION: f64 = 0.6;

/// Compound score at or beyond which the risk note escalates
pub const RISK_THRESHOLD: f64 = 0.25;

/// Positive proportion above which a text can read as mixed
pub const MIXED_POSITIVE: f64 = 0.45;

/// Negative proportion above which a text can read as mixed
pub const MIXED_NEGATIVE: f64 = 0.35;

/// Overall tone of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    /// Classify a compound score
    pub fn from_compound(compound: f64) -> Self {
        if compound >= TONE_THRESHOLD {
            Tone::Positive
        } else if compound <= -TONE_THRESHOLD {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive tone dominates",
            Tone::Neutral => "Neutral tone",
            Tone::Negative => "Negative / fearful tone",
        }
    }
}

/// Emotional bias detected in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasSignal {
    /// Excess optimism, fear of missing out
    Euphoria,
    /// Panic, loss aversion
    Panic,
    /// Balanced tone; clarifying would strengthen the message
    Balanced,
    /// Strong positive and negative feelings at once
    MixedEmotions,
}

impl BiasSignal {
    /// Signals raised by a result, in reporting order
    pub fn detect(result: &SentimentResult) -> Vec<BiasSignal> {
        let c = result.compound_score;
        let pos = result.positive_score;
        let neg = result.negative_score;

        let mut signals = Vec::new();
        if c >= BIAS_THRESHOLD || pos >= DOMINANT_PROPORTION {
            signals.push(BiasSignal::Euphoria);
        }
        if c <= -BIAS_THRESHOLD || neg >= DOMINANT_PROPORTION {
            signals.push(BiasSignal::Panic);
        }
        if c.abs() < TONE_THRESHOLD {
            signals.push(BiasSignal::Balanced);
        }
        if pos > MIXED_POSITIVE && neg > MIXED_NEGATIVE {
            signals.push(BiasSignal::MixedEmotions);
        }
        signals
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasSignal::Euphoria => "FOMO / excess optimism signal",
            BiasSignal::Panic => "Panic / loss aversion signal",
            BiasSignal::Balanced => "Balanced tone: clarifying would strengthen the message",
            BiasSignal::MixedEmotions => "Conflicting emotions: decision clarity may suffer",
        }
    }
}

/// Advice on how risky the tone of a text is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskNote {
    HighStress,
    Euphoric,
    Balanced,
}

impl RiskNote {
    pub fn from_compound(compound: f64) -> Self {
        if compound <= -RISK_THRESHOLD {
            RiskNote::HighStress
        } else if compound >= RISK_THRESHOLD {
            RiskNote::Euphoric
        } else {
            RiskNote::Balanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskNote::HighStress => {
                "High stress tone. Soften it and consider a shorter version before sending."
            }
            RiskNote::Euphoric => "Euphoric tone. Clarify it and add a counter-argument.",
            RiskNote::Balanced => "Balanced tone. Cutting the text by 20% may strengthen it.",
        }
    }
}

/// Proportions as whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl From<&SentimentResult> for ToneBreakdown {
    fn from(result: &SentimentResult) -> Self {
        let pct = |p: f64| (p.clamp(0.0, 1.0) * 100.0).round() as u32;
        Self {
            positive: pct(result.positive_score),
            neutral: pct(result.neutral_score),
            negative: pct(result.negative_score),
        }
    }
}

/// Everything derived from one text and its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub tone: Tone,
    pub signals: Vec<BiasSignal>,
    pub risk: RiskNote,
    pub breakdown: ToneBreakdown,
    pub power: MessagePower,
    /// Shorter cut of the text, when cutting removes anything
    pub shortened: Option<String>,
}

impl Interpretation {
    pub fn of(text: &str, result: &SentimentResult) -> Self {
        let shortened = shorten(text);
        let shortened = (shortened.len() < text.trim().len()).then_some(shortened);

        Self {
            tone: Tone::from_compound(result.compound_score),
            signals: BiasSignal::detect(result),
            risk: RiskNote::from_compound(result.compound_score),
            breakdown: ToneBreakdown::from(result),
            power: MessagePower::of(text),
            shortened,
        }
    }

    /// Human-readable summary, one item per line
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Tone: {}", self.tone.as_str()),
            format!(
                "Breakdown: {}% positive, {}% neutral, {}% negative",
                self.breakdown.positive, self.breakdown.neutral, self.breakdown.negative
            ),
        ];
        for signal in &self.signals {
            lines.push(format!("Signal: {}", signal.as_str()));
        }
        lines.push(format!("Risk: {}", self.risk.as_str()));
        lines.push(format!(
            "Power: {}/100 ({}). {}",
            self.power.score,
            self.power.level.as_str(),
            self.power.level.hint()
        ));
        if let Some(shortened) = &self.shortened {
            lines.push(format!("Shorter version: {}", shortened));
        }
        lines.join("\n")
    }
}
