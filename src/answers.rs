//! Collected onboarding answers
//!
//! An [`AnswerSet`] maps question ids to the value the user picked. It
//! serialises as a flat JSON object so progress files and answer files
//! passed to `shera score` share one format:
//!
//! ```json
//! { "age_group": "19_25", "family_history": "yes" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Single-choice option value; also used for text and date answers
    Choice(String),
    /// Multi-choice option values
    Choices(Vec<String>),
    /// Numeric answer
    Number(f64),
    /// Any other JSON value (null, bool, object); kept but never scored
    Other(serde_json::Value),
}

impl Answer {
    /// Option value when this is a single choice
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Choice(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Choice(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Choice(value)
    }
}

/// Answers keyed by question id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for a question
    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<Answer>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    /// Builder form of [`AnswerSet::insert`]
    pub fn with(mut self, question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.insert(question_id, answer);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Selected option value for a single-choice answer
    pub fn choice(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(Answer::as_choice)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(id, answer)| (id.as_str(), answer))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<Answer>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (id, answer) in iter {
            set.insert(id, answer);
        }
        set
    }
}
