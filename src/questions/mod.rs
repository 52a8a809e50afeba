//! Onboarding question definitions
//!
//! - `types`: questions, options, categories and visibility conditions
//! - `table`: the ordered, validated [`QuestionTable`]
//! - `catalog`: the built-in onboarding question set

pub mod catalog;
pub mod table;
pub mod types;

pub use table::QuestionTable;
pub use types::{AnswerOption, Category, Condition, Question, QuestionKind};
