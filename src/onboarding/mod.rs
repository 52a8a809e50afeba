//! Onboarding questionnaire
//!
//! Walks the user through the visible questions, persists progress after
//! every answer and produces the stored risk assessment at the end.

pub mod flow;
pub mod visibility;

pub use flow::{
    load_assessment, parse_answer, reset, AssessmentRecord, OnboardingFlow, OnboardingProgress, Step,
    COMPLETE_KEY, PROGRESS_KEY, RESULT_KEY,
};
pub use visibility::{hidden_answers, visible_questions};
