//! Risk assessment result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest reportable score
pub const MAX_SCORE: u8 = 100;

/// Scores above this are [`RiskLevel::High`]
pub const HIGH_ABOVE: u8 = 60;

/// Scores above this (and not high) are [`RiskLevel::Medium`]
pub const MEDIUM_ABOVE: u8 = 30;

/// Minimum option weight that surfaces an indicator
pub const INDICATOR_MIN_WEIGHT: u32 = 10;

/// Coarse risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a clamped score. Thresholds are strict: 30 is Low, 60 is Medium.
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_ABOVE {
            RiskLevel::High
        } else if score > MEDIUM_ABOVE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Your risk markers are low. Continue tracking your cycle to stay informed about your health."
            }
            RiskLevel::Medium => {
                "You have some common PCOS indicators. Focus on insulin-friendly nutrition and consistent tracking to manage symptoms."
            }
            RiskLevel::High => {
                "Your symptoms strongly align with PCOS markers. We recommend scheduling a consultation with a specialist for a formal diagnosis."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one completed answer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Weighted total clamped to `0..=100`
    pub score: u8,
    pub level: RiskLevel,
    pub recommendation: String,
    /// Unique labels in the order their questions were evaluated
    pub indicators: Vec<String>,
}

impl RiskResult {
    /// Build a result from an unclamped weight total
    pub fn from_total(total: u32, indicators: Vec<String>) -> Self {
        let score = total.min(u32::from(MAX_SCORE)) as u8;
        let level = RiskLevel::from_score(score);
        Self {
            score,
            level,
            recommendation: level.recommendation().to_string(),
            indicators,
        }
    }
}
