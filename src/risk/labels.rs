//! Indicator label lookup
//!
//! A contributing question is described by its override label when one is
//! registered for its id, otherwise by its category label.

use std::collections::BTreeMap;

use crate::questions::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorLabels {
    overrides: BTreeMap<String, String>,
}

impl IndicatorLabels {
    /// No overrides; every indicator is a category label
    pub fn empty() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Register or replace an override
    pub fn with_override(mut self, question_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(question_id.into(), label.into());
        self
    }

    /// Merge in overrides, replacing existing ones with the same id
    pub fn extend<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (id, label) in overrides {
            self.overrides.insert(id.into(), label.into());
        }
    }

    pub fn label_for<'a>(&'a self, question: &'a Question) -> &'a str {
        self.overrides
            .get(&question.id)
            .map(String::as_str)
            .unwrap_or_else(|| question.category.label())
    }

    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }
}

impl Default for IndicatorLabels {
    fn default() -> Self {
        Self::empty()
            .with_override("family_history", "Family history of PCOS/Metabolic issues")
            .with_override("excess_hair", "Excess body/facial hair growth")
            .with_override("period_regularity", "Cycle irregularity detected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::Category;

    #[test]
    fn test_override_wins() {
        let labels = IndicatorLabels::default();
        let q = Question::single_choice("excess_hair", "Hair?", Category::PcosIndicators);
        assert_eq!(labels.label_for(&q), "Excess body/facial hair growth");
    }

    #[test]
    fn test_falls_back_to_category() {
        let labels = IndicatorLabels::default();
        let q = Question::single_choice("self_harm", "Self-harm?", Category::RedFlagSafety);
        assert_eq!(labels.label_for(&q), "RED-FLAG SAFETY CHECK");
    }

    #[test]
    fn test_extend_replaces() {
        let mut labels = IndicatorLabels::default();
        labels.extend([("family_history", "Family history"), ("self_harm", "Safety concern")]);
        assert_eq!(labels.overrides().len(), 4);
        assert_eq!(labels.overrides()["family_history"], "Family history");
    }
}
