//! Weighted risk scoring over a question table
//!
//! Single pass in table order. For every answered single-choice question
//! the selected option's weight is added to the total; options weighing
//! [`INDICATOR_MIN_WEIGHT`] or more also contribute an indicator label.
//! Unknown ids, unknown option values and non-choice answers contribute
//! nothing, so any input yields a well-formed result.

use tracing::debug;

use super::labels::IndicatorLabels;
use super::types::{RiskResult, INDICATOR_MIN_WEIGHT};
use crate::answers::AnswerSet;
use crate::questions::{AnswerOption, Question, QuestionKind, QuestionTable};

/// Scores answer sets against a borrowed question table
#[derive(Debug, Clone)]
pub struct RiskScorer<'a> {
    table: &'a QuestionTable,
    labels: IndicatorLabels,
}

impl<'a> RiskScorer<'a> {
    pub fn new(table: &'a QuestionTable) -> Self {
        Self {
            table,
            labels: IndicatorLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: IndicatorLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Compute the risk result for `answers`. Never fails.
    pub fn score(&self, answers: &AnswerSet) -> RiskResult {
        let mut total: u32 = 0;
        let mut indicators: Vec<String> = Vec::new();

        for question in self.table {
            let Some(option) = Self::selected_option(question, answers) else {
                continue;
            };

            let weight = option.weight();
            total = total.saturating_add(weight);

            if weight >= INDICATOR_MIN_WEIGHT {
                let label = self.labels.label_for(question);
                if !indicators.iter().any(|existing| existing == label) {
                    indicators.push(label.to_string());
                }
            }

            if weight > 0 {
                debug!(question = %question.id, value = %option.value, weight, total, "answer contributes");
            }
        }

        let result = RiskResult::from_total(total, indicators);
        debug!(
            score = result.score,
            level = %result.level,
            indicators = result.indicators.len(),
            "risk computed"
        );
        result
    }

    /// The declared option matching the answer, for scored question kinds
    fn selected_option<'q>(question: &'q Question, answers: &AnswerSet) -> Option<&'q AnswerOption> {
        let answer = answers.get(&question.id)?;

        match question.kind {
            QuestionKind::SingleChoice => answer
                .as_choice()
                .and_then(|value| question.find_option(value)),
            // No scoring semantics for the other kinds
            QuestionKind::MultiChoice
            | QuestionKind::Text
            | QuestionKind::Numeric
            | QuestionKind::Date => None,
        }
    }
}

/// Score `answers` against `table` with the default indicator labels
pub fn compute_risk(answers: &AnswerSet, table: &QuestionTable) -> RiskResult {
    RiskScorer::new(table).score(answers)
}
