//! Question table type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::answers::AnswerSet;

/// Question input types
///
/// Only [`QuestionKind::SingleChoice`] carries scoring semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    Text,
    Numeric,
    Date,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::MultiChoice => "multi_choice",
            QuestionKind::Text => "text",
            QuestionKind::Numeric => "numeric",
            QuestionKind::Date => "date",
        }
    }
}

/// Question grouping; the label doubles as the fallback indicator text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "BASIC PROFILE")]
    BasicProfile,
    #[serde(rename = "MENSTRUAL HEALTH")]
    MenstrualHealth,
    #[serde(rename = "PCOD / PCOS INDICATORS")]
    PcosIndicators,
    #[serde(rename = "LIFESTYLE & METABOLIC HEALTH")]
    LifestyleMetabolic,
    #[serde(rename = "MENTAL HEALTH")]
    MentalHealth,
    #[serde(rename = "ADOLESCENT HEALTH")]
    AdolescentHealth,
    #[serde(rename = "RED-FLAG SAFETY CHECK")]
    RedFlagSafety,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::BasicProfile,
        Category::MenstrualHealth,
        Category::PcosIndicators,
        Category::LifestyleMetabolic,
        Category::MentalHealth,
        Category::AdolescentHealth,
        Category::RedFlagSafety,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::BasicProfile => "BASIC PROFILE",
            Category::MenstrualHealth => "MENSTRUAL HEALTH",
            Category::PcosIndicators => "PCOD / PCOS INDICATORS",
            Category::LifestyleMetabolic => "LIFESTYLE & METABOLIC HEALTH",
            Category::MentalHealth => "MENTAL HEALTH",
            Category::AdolescentHealth => "ADOLESCENT HEALTH",
            Category::RedFlagSafety => "RED-FLAG SAFETY CHECK",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<Category> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl AnswerOption {
    /// Risk contribution; absent weight counts as zero
    pub fn weight(&self) -> u32 {
        self.weight.unwrap_or(0)
    }
}

/// Visibility rule: show only when `depends_on` was answered with one of `show_if`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub depends_on: String,
    pub show_if: BTreeSet<String>,
}

impl Condition {
    pub fn is_met(&self, answers: &AnswerSet) -> bool {
        answers
            .choice(&self.depends_on)
            .map(|value| self.show_if.contains(value))
            .unwrap_or(false)
    }
}

/// A single onboarding question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub category: Category,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Question {
    /// Create a single-choice question with no options yet
    pub fn single_choice(id: &str, prompt: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: QuestionKind::SingleChoice,
            category,
            options: Vec::new(),
            condition: None,
        }
    }

    /// Add an unweighted option
    pub fn option(mut self, label: &str, value: &str) -> Self {
        self.options.push(AnswerOption {
            label: label.to_string(),
            value: value.to_string(),
            weight: None,
        });
        self
    }

    /// Add an option with an explicit weight
    pub fn weighted(mut self, label: &str, value: &str, weight: u32) -> Self {
        self.options.push(AnswerOption {
            label: label.to_string(),
            value: value.to_string(),
            weight: Some(weight),
        });
        self
    }

    /// Only show this question when `depends_on` has one of `values`
    pub fn shown_if(mut self, depends_on: &str, values: &[&str]) -> Self {
        self.condition = Some(Condition {
            depends_on: depends_on.to_string(),
            show_if: values.iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    /// Declared option with the given value
    pub fn find_option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Whether the question should be asked given the answers so far
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition.is_met(answers))
    }

    /// Largest weight any option can contribute
    pub fn max_weight(&self) -> u32 {
        self.options.iter().map(AnswerOption::weight).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adolescent_question() -> Question {
        Question::single_choice("academic_pressure", "Academic pressure:", Category::AdolescentHealth)
            .shown_if("age_group", &["below_13", "13_15", "16_18"])
            .option("No impact", "none")
            .weighted("Overwhelming", "overwhelming", 10)
    }

    #[test]
    fn test_absent_weight_is_zero() {
        let q = adolescent_question();
        assert_eq!(q.find_option("none").unwrap().weight(), 0);
        assert_eq!(q.find_option("overwhelming").unwrap().weight(), 10);
        assert_eq!(q.max_weight(), 10);
    }

    #[test]
    fn test_condition_visibility() {
        let q = adolescent_question();
        assert!(!q.is_visible(&AnswerSet::new()));
        assert!(q.is_visible(&AnswerSet::new().with("age_group", "13_15")));
        assert!(!q.is_visible(&AnswerSet::new().with("age_group", "26_35")));
    }

    #[test]
    fn test_unconditional_question_always_visible() {
        let q = Question::single_choice("hormonal_med", "On birth control?", Category::BasicProfile);
        assert!(q.is_visible(&AnswerSet::new()));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::RedFlagSafety.to_string(), "RED-FLAG SAFETY CHECK");
        assert_eq!(Category::from_label("mental health"), Some(Category::MentalHealth));
        assert_eq!(Category::from_label("unknown"), None);
    }

    #[test]
    fn test_category_serde_uses_label() {
        let json = serde_json::to_string(&Category::PcosIndicators).unwrap();
        assert_eq!(json, "\"PCOD / PCOS INDICATORS\"");
    }
}
