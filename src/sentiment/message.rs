//! # Message Power
//!
//! Language-independent heuristics on the shape of a text: how forceful it
//! reads (length, sentence count and size, exclamation marks) and a
//! shorter cut of it.

use serde::{Deserialize, Serialize};

/// Score every text starts from before adjustments
const BASE_SCORE: i32 = 50;

/// Minimum length, in characters, of a shortened text
pub const MIN_SHORTENED_CHARS: usize = 80;

/// Strength band of a power score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerLevel {
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PowerLevel {
    /// Band a 0-100 score
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            PowerLevel::VeryStrong
        } else if score >= 65 {
            PowerLevel::Strong
        } else if score <= 35 {
            PowerLevel::Weak
        } else {
            PowerLevel::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerLevel::Empty => "Empty",
            PowerLevel::Weak => "Weak",
            PowerLevel::Medium => "Medium",
            PowerLevel::Strong => "Strong",
            PowerLevel::VeryStrong => "Very strong",
        }
    }

    /// Advice on how to raise the score
    pub fn hint(&self) -> &'static str {
        match self {
            PowerLevel::Empty => "Enter a text to see its power score.",
            PowerLevel::Weak => "Shorten the text and back a single claim with a single sentence.",
            PowerLevel::Medium => "Clarify it and add a counter-argument to make it clearly stronger.",
            PowerLevel::Strong => "Trim a little and add a risk sentence to make it excellent.",
            PowerLevel::VeryStrong => "Short, clear, balanced tone.",
        }
    }
}

/// How forceful a message reads, 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePower {
    pub score: u8,
    pub level: PowerLevel,
}

impl MessagePower {
    /// Score the shape of a text. Leading and trailing whitespace is ignored.
    pub fn of(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self {
                score: 0,
                level: PowerLevel::Empty,
            };
        }

        let len = text.chars().count();
        let sentences = text
            .split(|c: char| matches!(c, '.' | '!' | '?' | '…'))
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);
        let avg_len = (len as f64 / sentences as f64).round() as usize;
        let exclamations = text.matches('!').count();

        let mut score = BASE_SCORE;
        if len < 80 {
            score -= 15;
        }
        if len > 700 {
            score -= 12;
        }
        if (2..=6).contains(&sentences) {
            score += 15;
        }
        if (25..=90).contains(&avg_len) {
            score += 10;
        }
        if exclamations >= 3 {
            score -= 8;
        }

        let score = score.clamp(0, 100) as u8;
        Self {
            score,
            level: PowerLevel::from_score(score),
        }
    }
}

/// Cut a text to 70% of its length, never below 80 characters
pub fn shorten(text: &str) -> String {
    let text = text.trim();
    let len = text.chars().count();
    let target = MIN_SHORTENED_CHARS.max(len * 7 / 10);
    text.chars().take(target).collect()
}
