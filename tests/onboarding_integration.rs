//! Integration tests for the onboarding flow against an on-disk store

use shera::onboarding::{self, OnboardingFlow, Step, COMPLETE_KEY, PROGRESS_KEY, RESULT_KEY};
use shera::store::{FileStore, KeyValueStore};
use shera::{QuestionTable, RiskLevel, SheraError};
use tempfile::TempDir;

fn create_test_store() -> (FileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();
    (store, temp_dir)
}

/// Scripted answers for an adult user
fn adult_answer(question_id: &str) -> Option<&'static str> {
    match question_id {
        "age_group" => Some("26_35"),
        "period_regularity" => Some("very_irregular"),
        "family_history" => Some("yes"),
        _ => None,
    }
}

fn run_to_completion(flow: &mut OnboardingFlow<'_, &mut FileStore>) -> onboarding::AssessmentRecord {
    loop {
        let question = flow.current().expect("flow ended without completing");
        let value = match adult_answer(&question.id) {
            Some(value) => value.to_string(),
            // First zero-weight option keeps the score predictable
            None => question
                .options
                .iter()
                .find(|o| o.weight() == 0)
                .expect("question without a zero-weight option")
                .value
                .clone(),
        };

        if let Step::Completed(record) = flow.answer(&value).unwrap() {
            return record;
        }
    }
}

#[test]
fn test_full_adult_onboarding() {
    let table = QuestionTable::builtin();
    let (mut store, _temp) = create_test_store();

    let record = {
        let mut flow = OnboardingFlow::resume(&table, &mut store).unwrap();
        assert_eq!(flow.position(), (1, 26));
        let record = run_to_completion(&mut flow);

        // Adolescent questions were never asked
        assert!(!flow.answers().contains("academic_pressure"));
        assert_eq!(flow.answers().len(), 26);
        record
    };

    assert_eq!(record.result.score, 30);
    assert_eq!(record.result.level, RiskLevel::Low);
    assert_eq!(
        record.result.indicators,
        vec!["Cycle irregularity detected", "Family history of PCOS/Metabolic issues"]
    );

    assert_eq!(store.get(COMPLETE_KEY).unwrap().as_deref(), Some("true"));
    assert!(store.dir().join(format!("{}.json", RESULT_KEY)).exists());
    assert_eq!(onboarding::load_assessment(&store).unwrap(), Some(record));
}

#[test]
fn test_completed_onboarding_survives_restart() {
    let table = QuestionTable::builtin();
    let (mut store, temp) = create_test_store();

    let record = {
        let mut flow = OnboardingFlow::resume(&table, &mut store).unwrap();
        run_to_completion(&mut flow)
    };

    let reopened = FileStore::open(temp.path()).unwrap();
    let mut flow = OnboardingFlow::resume(&table, reopened).unwrap();
    assert!(flow.is_complete());
    assert!(flow.current().is_none());
    assert_eq!(flow.stored_result().unwrap(), Some(record));
    assert!(matches!(flow.answer("26_35"), Err(SheraError::AlreadyCompleted)));
}

#[test]
fn test_interrupted_onboarding_resumes() {
    let table = QuestionTable::builtin();
    let (store, temp) = create_test_store();

    {
        let mut flow = OnboardingFlow::resume(&table, store).unwrap();
        flow.answer("16_18").unwrap();
        flow.answer("10_12").unwrap();
        flow.answer("average").unwrap();
    }

    let reopened = FileStore::open(temp.path()).unwrap();
    assert!(reopened.get(PROGRESS_KEY).unwrap().is_some());

    let flow = OnboardingFlow::resume(&table, reopened).unwrap();
    assert_eq!(flow.answers().len(), 3);
    assert_eq!(flow.current().unwrap().id, "hormonal_med");
    // Teen answer makes the adolescent questions part of the run
    assert_eq!(flow.position(), (4, 29));
}

#[test]
fn test_reset_clears_everything() {
    let table = QuestionTable::builtin();
    let (mut store, _temp) = create_test_store();

    {
        let mut flow = OnboardingFlow::resume(&table, &mut store).unwrap();
        run_to_completion(&mut flow);
    }

    onboarding::reset(&mut store).unwrap();
    assert_eq!(store.get(PROGRESS_KEY).unwrap(), None);
    assert_eq!(store.get(RESULT_KEY).unwrap(), None);
    assert_eq!(store.get(COMPLETE_KEY).unwrap(), None);

    let flow = OnboardingFlow::resume(&table, &mut store).unwrap();
    assert!(!flow.is_complete());
    assert_eq!(flow.current().unwrap().id, "age_group");
}
