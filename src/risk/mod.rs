//! Risk scoring
//!
//! Turns a completed [`AnswerSet`](crate::answers::AnswerSet) into a
//! [`RiskResult`]: a clamped score, a Low/Medium/High level, a fixed
//! recommendation and the indicators that drove the score.

pub mod labels;
pub mod scorer;
pub mod types;

pub use labels::IndicatorLabels;
pub use scorer::{compute_risk, RiskScorer};
pub use types::{RiskLevel, RiskResult, INDICATOR_MIN_WEIGHT, MAX_SCORE};
