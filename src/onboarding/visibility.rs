//! Conditional question visibility

use crate::answers::AnswerSet;
use crate::questions::{Question, QuestionTable};

/// Questions to ask given the answers so far, in table order
pub fn visible_questions<'a>(table: &'a QuestionTable, answers: &AnswerSet) -> Vec<&'a Question> {
    table.iter().filter(|q| q.is_visible(answers)).collect()
}

/// Ids of answered questions that the current answers hide
pub fn hidden_answers<'a>(table: &'a QuestionTable, answers: &AnswerSet) -> Vec<&'a str> {
    table
        .iter()
        .filter(|q| answers.contains(&q.id) && !q.is_visible(answers))
        .map(|q| q.id.as_str())
        .collect()
}
