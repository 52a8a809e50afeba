//! Error types for SHEra
//!
//! Scoring itself is total and never produces an error. Everything around it
//! (question tables, onboarding state, configuration) reports through
//! [`SheraError`].

use thiserror::Error;

/// Main error type for the onboarding and scoring system
#[derive(Error, Debug)]
pub enum SheraError {
    /// Two questions in one table share an id
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// A condition points at a question that does not precede it
    #[error("Question {question} depends on unknown or later question {depends_on}")]
    UnknownDependency {
        question: String,
        depends_on: String,
    },

    /// Malformed question definition
    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },

    /// Answer value not declared by the question
    #[error("Invalid answer {value:?} for question {question}")]
    InvalidAnswer { question: String, value: String },

    /// Onboarding already finished
    #[error("Onboarding already completed; reset to start again")]
    AlreadyCompleted,

    /// Key-value store errors
    #[error("Store error: {0}")]
    StoreError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for SHEra operations
pub type Result<T> = std::result::Result<T, SheraError>;

/// Convert anyhow errors to SheraError
impl From<anyhow::Error> for SheraError {
    fn from(err: anyhow::Error) -> Self {
        SheraError::Generic(err.to_string())
    }
}
