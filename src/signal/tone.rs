//! Qualitative tone classification for reputation signals.
//!
//! Classification is a pure function of the raw signal key and its value.
//! Score-like keys are normalized onto a 0-1 scale and thresholded; a few
//! well-known keys carry their own unit-aware rules; everything else falls
//! back to token matching on text and sign checks on numbers.

use std::fmt;

use serde::Serialize;

use super::value::SignalValue;

/// Qualitative classification of a signal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// The signal reads as healthy.
    Positive,
    /// The signal is informational or inconclusive.
    Neutral,
    /// The signal reads as degraded or failing.
    Negative,
}

impl Tone {
    /// Stable lowercase name, suitable for keying CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys whose numeric values are scores, normalized onto the 0-1 scale
/// before thresholding.
const SCORE_KEYS: &[&str] = &[
    "uptime_score",
    "uptime_ratio",
    "recency_score",
    "latency_score",
    "anonymity_score",
    "failures_score",
];

/// Normalized score at or above which a signal reads positive.
const SCORE_POSITIVE_MIN: f64 = 0.66;
/// Normalized score at or above which a signal reads neutral.
const SCORE_NEUTRAL_MIN: f64 = 0.33;

/// Substrings of generic text values that read as healthy.
const POSITIVE_TOKENS: &[&str] = &["true", "yes", "low", "good", "success"];
/// Substrings of generic text values that read as degraded.
const NEGATIVE_TOKENS: &[&str] = &["false", "no", "high", "bad", "poor", "fail"];

/// Classify a signal value under its raw key.
///
/// Total over every [`SignalValue`], including non-finite numbers; composite
/// and null values are always neutral.
pub fn classify(raw_key: &str, value: &SignalValue) -> Tone {
    match value {
        SignalValue::Null | SignalValue::List(_) | SignalValue::Map(_) => Tone::Neutral,
        SignalValue::Bool(true) => Tone::Positive,
        SignalValue::Bool(false) => Tone::Negative,
        SignalValue::Number(number) => classify_number(raw_key, *number),
        SignalValue::Text(text) => classify_text(raw_key, text),
    }
}

/// Threshold a 0-1 score into a tone.
fn score_tone(score: f64) -> Tone {
    if score >= SCORE_POSITIVE_MIN {
        Tone::Positive
    } else if score >= SCORE_NEUTRAL_MIN {
        Tone::Neutral
    } else {
        Tone::Negative
    }
}

fn classify_number(raw_key: &str, value: f64) -> Tone {
    if SCORE_KEYS.contains(&raw_key) {
        // Percent-scale scores (e.g. 85) are brought down to the 0-1 scale.
        let normalized = if value > 1.0 { value / 100.0 } else { value };
        return score_tone(normalized);
    }
    match raw_key {
        "latency_median_ms" => {
            if value <= 600.0 {
                Tone::Positive
            } else if value <= 2000.0 {
                Tone::Neutral
            } else {
                Tone::Negative
            }
        }
        "recency_minutes" => {
            if value <= 30.0 {
                Tone::Positive
            } else if value <= 180.0 {
                Tone::Neutral
            } else {
                Tone::Negative
            }
        }
        "failure_streak" => {
            if value == 0.0 {
                Tone::Positive
            } else if value <= 2.0 {
                Tone::Neutral
            } else {
                Tone::Negative
            }
        }
        _ => {
            if value < 0.0 {
                Tone::Negative
            } else {
                Tone::Neutral
            }
        }
    }
}

fn classify_text(raw_key: &str, text: &str) -> Tone {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return Tone::Neutral;
    }
    match raw_key {
        "anonymity" => score_tone(anonymity_score(&lowered)),
        "estimated_type" => score_tone(estimated_type_score(&lowered)),
        _ => {
            // Positive tokens win when a value contains both kinds.
            if POSITIVE_TOKENS.iter().any(|token| lowered.contains(token)) {
                Tone::Positive
            } else if NEGATIVE_TOKENS.iter().any(|token| lowered.contains(token)) {
                Tone::Negative
            } else {
                Tone::Neutral
            }
        }
    }
}

/// Score equivalent of an anonymity level. Unknown levels sit mid-scale.
fn anonymity_score(level: &str) -> f64 {
    match level {
        "elite" => 1.0,
        "anonymous" => 0.8,
        "transparent" => 0.3,
        _ => 0.5,
    }
}

/// Score equivalent of an estimated network type. Unknown types lean neutral.
fn estimated_type_score(kind: &str) -> f64 {
    match kind {
        "residential" => 1.0,
        "isp" => 0.9,
        "mobile" => 0.85,
        "datacenter" => 0.4,
        _ => 0.6,
    }
}
