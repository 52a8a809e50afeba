//! Sequential onboarding flow with resumable progress
//!
//! Questions are asked one at a time over the currently visible subset of
//! the table. Every answer is persisted immediately under
//! [`PROGRESS_KEY`], so an interrupted session resumes where it stopped.
//! Answering the last visible question scores the answers, stores the
//! [`AssessmentRecord`] under [`RESULT_KEY`] and marks onboarding complete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::visibility::visible_questions;
use crate::answers::{Answer, AnswerSet};
use crate::errors::{Result, SheraError};
use crate::questions::{Question, QuestionKind, QuestionTable};
use crate::risk::{IndicatorLabels, RiskResult, RiskScorer};
use crate::store::KeyValueStore;

pub const PROGRESS_KEY: &str = "onboarding_progress";
pub const RESULT_KEY: &str = "risk_result";
pub const COMPLETE_KEY: &str = "onboarding_complete";

/// Saved position within the onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    pub answers: AnswerSet,
    pub index: usize,
}

/// A stored risk result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: RiskResult,
}

impl AssessmentRecord {
    pub fn new(result: RiskResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at: Utc::now(),
            result,
        }
    }
}

/// Outcome of answering a question
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Another question follows
    Next,
    /// That was the last visible question
    Completed(AssessmentRecord),
}

pub struct OnboardingFlow<'a, S: KeyValueStore> {
    table: &'a QuestionTable,
    labels: IndicatorLabels,
    store: S,
    progress: OnboardingProgress,
    completed: bool,
}

impl<'a, S: KeyValueStore> OnboardingFlow<'a, S> {
    /// Pick up saved progress (or start fresh) from `store`
    pub fn resume(table: &'a QuestionTable, store: S) -> Result<Self> {
        let completed = store.get(COMPLETE_KEY)?.as_deref() == Some("true");

        let progress = match store.get(PROGRESS_KEY)? {
            Some(json) => match serde_json::from_str::<OnboardingProgress>(&json) {
                Ok(progress) => progress,
                Err(e) => {
                    warn!("Discarding unreadable onboarding progress: {}", e);
                    OnboardingProgress::default()
                }
            },
            None => OnboardingProgress::default(),
        };

        let mut flow = Self {
            table,
            labels: IndicatorLabels::default(),
            store,
            progress,
            completed,
        };
        flow.clamp_index();

        info!(
            answered = flow.progress.answers.len(),
            index = flow.progress.index,
            completed = flow.completed,
            "onboarding resumed"
        );
        Ok(flow)
    }

    pub fn with_labels(mut self, labels: IndicatorLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.progress.answers
    }

    pub fn visible(&self) -> Vec<&'a Question> {
        visible_questions(self.table, &self.progress.answers)
    }

    /// The question waiting for an answer
    pub fn current(&self) -> Option<&'a Question> {
        if self.completed {
            return None;
        }
        self.visible().get(self.progress.index).copied()
    }

    /// One-based position and number of visible questions
    pub fn position(&self) -> (usize, usize) {
        let total = self.visible().len();
        ((self.progress.index + 1).min(total), total)
    }

    /// Fraction of the visible questions reached, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        let (position, total) = self.position();
        if total == 0 {
            return 1.0;
        }
        position as f64 / total as f64
    }

    /// Answer the current question with a raw value
    pub fn answer(&mut self, raw: &str) -> Result<Step> {
        if self.completed {
            return Err(SheraError::AlreadyCompleted);
        }
        let question = self
            .current()
            .ok_or_else(|| SheraError::Generic("No question left to answer".to_string()))?;

        let answer = parse_answer(question, raw)?;
        self.progress.answers.insert(question.id.clone(), answer);

        let next = self.progress.index + 1;
        self.progress.index = next;
        self.save_progress()?;

        // Visibility is re-evaluated with the new answer included
        if next < self.visible().len() {
            return Ok(Step::Next);
        }

        self.complete().map(Step::Completed)
    }

    /// Step back one question; false when already at the first
    pub fn back(&mut self) -> Result<bool> {
        if self.completed || self.progress.index == 0 {
            return Ok(false);
        }
        self.progress.index -= 1;
        self.save_progress()?;
        Ok(true)
    }

    /// Stored assessment, if onboarding finished earlier
    pub fn stored_result(&self) -> Result<Option<AssessmentRecord>> {
        load_assessment(&self.store)
    }

    /// Forget all onboarding state
    pub fn reset(&mut self) -> Result<()> {
        reset(&mut self.store)?;
        self.progress = OnboardingProgress::default();
        self.completed = false;
        Ok(())
    }

    fn complete(&mut self) -> Result<AssessmentRecord> {
        let result = RiskScorer::new(self.table)
            .with_labels(self.labels.clone())
            .score(&self.progress.answers);
        let record = AssessmentRecord::new(result);

        self.store
            .set(RESULT_KEY, &serde_json::to_string(&record)?)?;
        self.store.set(COMPLETE_KEY, "true")?;
        self.completed = true;

        info!(
            id = %record.id,
            score = record.result.score,
            level = %record.result.level,
            "onboarding completed"
        );
        Ok(record)
    }

    fn save_progress(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.progress)?;
        self.store.set(PROGRESS_KEY, &json)
    }

    fn clamp_index(&mut self) {
        let total = self.visible().len();
        if self.progress.index >= total {
            self.progress.index = total.saturating_sub(1);
        }
    }
}

/// Validate and convert a raw answer for `question`
pub fn parse_answer(question: &Question, raw: &str) -> Result<Answer> {
    let raw = raw.trim();
    let invalid = || SheraError::InvalidAnswer {
        question: question.id.clone(),
        value: raw.to_string(),
    };

    match question.kind {
        QuestionKind::SingleChoice => question
            .find_option(raw)
            .map(|option| Answer::Choice(option.value.clone()))
            .ok_or_else(invalid),
        QuestionKind::MultiChoice => {
            let values: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            if values.is_empty() || values.iter().any(|v| question.find_option(v).is_none()) {
                return Err(invalid());
            }
            Ok(Answer::Choices(values))
        }
        QuestionKind::Numeric => raw.parse::<f64>().map(Answer::Number).map_err(|_| invalid()),
        QuestionKind::Date => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| Answer::Choice(date.to_string()))
            .map_err(|_| invalid()),
        QuestionKind::Text => {
            if raw.is_empty() {
                Err(invalid())
            } else {
                Ok(Answer::Choice(raw.to_string()))
            }
        }
    }
}

/// Read the stored assessment from `store`
pub fn load_assessment<S: KeyValueStore>(store: &S) -> Result<Option<AssessmentRecord>> {
    match store.get(RESULT_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Remove progress, result and completion flag from `store`
pub fn reset<S: KeyValueStore>(store: &mut S) -> Result<()> {
    store.remove(PROGRESS_KEY)?;
    store.remove(RESULT_KEY)?;
    store.remove(COMPLETE_KEY)?;
    info!("onboarding state cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::Category;
    use crate::risk::RiskLevel;
    use crate::store::MemoryStore;

    fn small_table() -> QuestionTable {
        QuestionTable::new(vec![
            Question::single_choice("age_group", "Age?", Category::BasicProfile)
                .option("Teen", "13_15")
                .option("Adult", "26_35"),
            Question::single_choice("academic_pressure", "Pressure?", Category::AdolescentHealth)
                .shown_if("age_group", &["13_15"])
                .option("None", "none")
                .weighted("Overwhelming", "overwhelming", 10),
            Question::single_choice("family_history", "Family?", Category::PcosIndicators)
                .weighted("Yes", "yes", 10)
                .option("No", "no"),
        ])
        .unwrap()
    }

    #[test]
    fn test_fresh_flow_starts_at_first_question() {
        let table = small_table();
        let flow = OnboardingFlow::resume(&table, MemoryStore::new()).unwrap();
        assert!(!flow.is_complete());
        assert_eq!(flow.current().unwrap().id, "age_group");
        assert_eq!(flow.position(), (1, 2));
    }

    #[test]
    fn test_adult_path_completes() {
        let table = small_table();
        let mut store = MemoryStore::new();
        let record = {
            let mut flow = OnboardingFlow::resume(&table, &mut store).unwrap();

            assert_eq!(flow.answer("26_35").unwrap(), Step::Next);
            assert_eq!(flow.current().unwrap().id, "family_history");

            let record = match flow.answer("yes").unwrap() {
                Step::Completed(record) => record,
                Step::Next => panic!("expected completion"),
            };
            assert!(flow.is_complete());
            assert!(flow.current().is_none());
            record
        };
        assert_eq!(record.result.score, 10);
        assert_eq!(record.result.level, RiskLevel::Low);

        assert_eq!(store.get(COMPLETE_KEY).unwrap().as_deref(), Some("true"));
        let stored = load_assessment(&store).unwrap().unwrap();
        assert_eq!(stored, record);
    }

    #[test]
    fn test_teen_answer_reveals_conditional_question() {
        let table = small_table();
        let mut flow = OnboardingFlow::resume(&table, MemoryStore::new()).unwrap();

        flow.answer("13_15").unwrap();
        assert_eq!(flow.position(), (2, 3));
        assert_eq!(flow.current().unwrap().id, "academic_pressure");
    }

    #[test]
    fn test_progress_tracks_visible_questions() {
        let table = small_table();
        let mut flow = OnboardingFlow::resume(&table, MemoryStore::new()).unwrap();
        assert_eq!(flow.progress(), 0.5);

        // Conditional question grows the run to three
        flow.answer("13_15").unwrap();
        assert!((flow.progress() - 2.0 / 3.0).abs() < f64::EPSILON);

        flow.answer("none").unwrap();
        flow.answer("no").unwrap();
        assert!(flow.is_complete());
        assert_eq!(flow.progress(), 1.0);
    }

    #[test]
    fn test_invalid_answer_rejected_without_advancing() {
        let table = small_table();
        let mut flow = OnboardingFlow::resume(&table, MemoryStore::new()).unwrap();

        let err = flow.answer("36_plus").unwrap_err();
        assert!(matches!(err, SheraError::InvalidAnswer { .. }));
        assert_eq!(flow.current().unwrap().id, "age_group");
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn test_back_and_change_answer() {
        let table = small_table();
        let mut flow = OnboardingFlow::resume(&table, MemoryStore::new()).unwrap();

        flow.answer("26_35").unwrap();
        assert!(flow.back().unwrap());
        assert!(!flow.back().unwrap());
        assert_eq!(flow.current().unwrap().id, "age_group");

        flow.answer("13_15").unwrap();
        assert_eq!(flow.current().unwrap().id, "academic_pressure");
    }

    #[test]
    fn test_resume_from_saved_progress() {
        let table = small_table();
        let mut store = MemoryStore::new();
        {
            let mut flow = OnboardingFlow::resume(&table, &mut store).unwrap();
            flow.answer("13_15").unwrap();
        }

        let flow = OnboardingFlow::resume(&table, &mut store).unwrap();
        assert_eq!(flow.answers().choice("age_group"), Some("13_15"));
        assert_eq!(flow.current().unwrap().id, "academic_pressure");
    }

    #[test]
    fn test_corrupt_progress_starts_fresh() {
        let table = small_table();
        let mut store = MemoryStore::new();
        store.set(PROGRESS_KEY, "not json").unwrap();

        let flow = OnboardingFlow::resume(&table, store).unwrap();
        assert!(flow.answers().is_empty());
        assert_eq!(flow.current().unwrap().id, "age_group");
    }

    #[test]
    fn test_completed_flow_rejects_answers_until_reset() {
        let table = small_table();
        let mut store = MemoryStore::new();
        store.set(COMPLETE_KEY, "true").unwrap();

        let mut flow = OnboardingFlow::resume(&table, store).unwrap();
        assert!(flow.is_complete());
        assert!(matches!(flow.answer("26_35"), Err(SheraError::AlreadyCompleted)));

        flow.reset().unwrap();
        assert!(!flow.is_complete());
        assert_eq!(flow.answer("26_35").unwrap(), Step::Next);
    }

    #[test]
    fn test_parse_answer_kinds() {
        let mut numeric = Question::single_choice("cycle_days", "Days?", Category::MenstrualHealth);
        numeric.kind = QuestionKind::Numeric;
        assert_eq!(parse_answer(&numeric, " 28 ").unwrap(), Answer::Number(28.0));
        assert!(parse_answer(&numeric, "many").is_err());

        let mut date = Question::single_choice("last_period", "When?", Category::MenstrualHealth);
        date.kind = QuestionKind::Date;
        assert_eq!(
            parse_answer(&date, "2026-09-30").unwrap(),
            Answer::Choice("2026-09-30".to_string())
        );
        assert!(parse_answer(&date, "yesterday").is_err());

        let mut multi = Question::single_choice("symptoms", "Symptoms?", Category::MenstrualHealth)
            .option("Cramps", "cramps")
            .option("Bloating", "bloating");
        multi.kind = QuestionKind::MultiChoice;
        assert_eq!(
            parse_answer(&multi, "cramps, bloating").unwrap(),
            Answer::Choices(vec!["cramps".to_string(), "bloating".to_string()])
        );
        assert!(parse_answer(&multi, "cramps,headache").is_err());
    }

    #[test]
    fn test_record_json_is_flat() {
        let record = AssessmentRecord::new(RiskResult::from_total(45, Vec::new()));
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["score"], 45);
        assert_eq!(json["level"], "Medium");
        assert!(json["id"].is_string());
        assert!(json["completed_at"].is_string());
    }
}
