//! SHEra v0.5.0 - Onboarding & Risk Assessment
//!
//! Scores the SHEra onboarding questionnaire into a PCOS risk assessment.
//!
//! # Architecture
//!
//! - **questions**: typed question table, built-in catalog, TOML loader
//! - **risk**: pure weighted scoring into a [`RiskResult`]
//! - **onboarding**: resumable question flow persisted to a key-value store
//! - **cli**: arguments, configuration and terminal output for the binary

pub mod answers;
pub mod errors;
pub mod questions;
pub mod risk;

// Re-export commonly used types
pub use answers::{Answer, AnswerSet};
pub use errors::{Result, SheraError};
pub use questions::{Question, QuestionTable};
pub use risk::{compute_risk, RiskLevel, RiskResult, RiskScorer};

// Onboarding flow and persistence
pub mod onboarding;
pub mod store;

// Command-line front end
pub mod cli;
pub mod logging;
