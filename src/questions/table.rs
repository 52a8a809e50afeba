//! Ordered, validated question table
//!
//! The table is plain immutable data handed to the scorer and the
//! onboarding flow. Table order is significant: it is the order questions
//! are asked in and the order indicators are reported in.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::catalog;
use super::types::{Category, Question, QuestionKind};
use crate::errors::{Result, SheraError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTable {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

/// On-disk TOML layout: a `[[questions]]` array
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    questions: Vec<Question>,
}

impl QuestionTable {
    /// Build a table, validating ids, options and conditions
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut index = HashMap::with_capacity(questions.len());

        for (position, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(SheraError::InvalidQuestion {
                    id: format!("#{}", position + 1),
                    reason: "question id must not be empty".to_string(),
                });
            }

            if let Some(condition) = &question.condition {
                // Dependencies must already be in the index, i.e. asked earlier
                if !index.contains_key(&condition.depends_on) {
                    return Err(SheraError::UnknownDependency {
                        question: question.id.clone(),
                        depends_on: condition.depends_on.clone(),
                    });
                }
            }

            Self::validate_options(question)?;

            if index.insert(question.id.clone(), position).is_some() {
                return Err(SheraError::DuplicateQuestion(question.id.clone()));
            }
        }

        Ok(Self { questions, index })
    }

    fn validate_options(question: &Question) -> Result<()> {
        match question.kind {
            QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
                if question.options.is_empty() {
                    return Err(SheraError::InvalidQuestion {
                        id: question.id.clone(),
                        reason: "choice question has no options".to_string(),
                    });
                }
                let mut seen = HashSet::new();
                for option in &question.options {
                    if !seen.insert(option.value.as_str()) {
                        return Err(SheraError::InvalidQuestion {
                            id: question.id.clone(),
                            reason: format!("duplicate option value {:?}", option.value),
                        });
                    }
                }
                Ok(())
            }
            QuestionKind::Text | QuestionKind::Numeric | QuestionKind::Date => Ok(()),
        }
    }

    /// The onboarding questions shipped with the app
    pub fn builtin() -> Self {
        let questions = catalog::onboarding_questions();
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, q)| (q.id.clone(), position))
            .collect();
        Self { questions, index }
    }

    /// Parse a TOML question table
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(contents)?;
        Self::new(file.questions)
    }

    /// Load a TOML question table from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SheraError::ConfigError(format!(
                "Failed to read question table {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), questions = table.len(), "loaded question table");
        Ok(table)
    }

    /// Serialize to the TOML layout accepted by [`QuestionTable::from_toml_str`]
    pub fn to_toml_string(&self) -> Result<String> {
        let file = TableFile {
            questions: self.questions.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| SheraError::ConfigError(format!("Failed to serialize question table: {}", e)))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a QuestionTable {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
