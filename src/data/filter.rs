use super::trials::{TrialRecord, TrialStatus};

// ---------------------------------------------------------------------------
// Filter criteria: what the user typed or picked in the search form
// ---------------------------------------------------------------------------

/// Search form state. An empty string means "no constraint" for that field;
/// the select fields also accept their placeholder value `"any"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub cell_type: String,
    pub condition: String,
    pub phase: String,
    pub virtual_only: bool,
    pub recruiting_only: bool,
}

/// Free text is matched as typed, whitespace included.
fn active_text(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// `None` when a select field does not constrain the search.
fn active_choice(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("any") {
        None
    } else {
        Some(value)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl FilterCriteria {
    /// Whether a single record passes every active criterion.
    ///
    /// * search text → case-insensitive substring of title, description or condition
    /// * cell type → case-insensitive exact match against any tag
    /// * condition → case-insensitive substring of the condition
    /// * phase → substring of the phase string ("Phase 1" matches "Phase 1/2")
    pub fn matches(&self, trial: &TrialRecord) -> bool {
        if let Some(term) = active_text(&self.search) {
            let hit = contains_ci(trial.title, term)
                || contains_ci(trial.description, term)
                || contains_ci(trial.condition, term);
            if !hit {
                return false;
            }
        }
        if let Some(cell) = active_choice(&self.cell_type) {
            if !trial.cell_types.iter().any(|c| c.eq_ignore_ascii_case(cell)) {
                return false;
            }
        }
        if let Some(condition) = active_choice(&self.condition) {
            if !contains_ci(trial.condition, condition) {
                return false;
            }
        }
        if let Some(phase) = active_choice(&self.phase) {
            if !trial.phase.contains(phase) {
                return false;
            }
        }
        if self.recruiting_only && trial.status != TrialStatus::Recruiting {
            return false;
        }
        if self.virtual_only && !trial.allows_virtual_participation() {
            return false;
        }
        true
    }
}

/// Records passing all criteria, in catalogue order.
pub fn filter_trials<'a>(
    trials: &'a [TrialRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a TrialRecord> {
    trials.iter().filter(|t| criteria.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::trials::TRIALS;

    fn ids(found: &[&TrialRecord]) -> Vec<&'static str> {
        found.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let found = filter_trials(&TRIALS, &FilterCriteria::default());
        assert_eq!(found.len(), 6);
        assert_eq!(ids(&found), TRIALS.iter().map(|t| t.id).collect::<Vec<_>>());
    }

    #[test]
    fn cell_type_is_exact_and_case_insensitive() {
        let criteria = FilterCriteria {
            cell_type: "MSC".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trials(&TRIALS, &criteria)), vec!["NCT04713839"]);

        let criteria = FilterCriteria {
            cell_type: "ipsc".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trials(&TRIALS, &criteria)), vec!["NCT05116540"]);

        let criteria = FilterCriteria {
            cell_type: "SC".into(),
            ..Default::default()
        };
        assert!(filter_trials(&TRIALS, &criteria).is_empty());
    }

    #[test]
    fn search_text_checks_title_description_and_condition() {
        let criteria = FilterCriteria {
            search: "QUERCETIN".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trials(&TRIALS, &criteria)), vec!["NCT04614337"]);

        let criteria = FilterCriteria {
            search: "immunosenescence".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trials(&TRIALS, &criteria)), vec!["NCT05209698"]);
    }

    #[test]
    fn phase_is_a_substring_match() {
        let criteria = FilterCriteria {
            phase: "Phase 1".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_trials(&TRIALS, &criteria)),
            vec!["NCT05116540", "NCT05209698", "NCT04815005"]
        );

        let criteria = FilterCriteria {
            phase: "Phase 4".into(),
            ..Default::default()
        };
        assert!(filter_trials(&TRIALS, &criteria).is_empty());
    }

    #[test]
    fn any_is_treated_as_unset() {
        let criteria = FilterCriteria {
            cell_type: "any".into(),
            condition: "any".into(),
            phase: "any".into(),
            ..Default::default()
        };
        assert_eq!(filter_trials(&TRIALS, &criteria).len(), 6);
    }

    #[test]
    fn search_text_is_literal() {
        let criteria = FilterCriteria {
            search: "Any".into(),
            ..Default::default()
        };
        assert!(filter_trials(&TRIALS, &criteria).is_empty());

        let trimmed = FilterCriteria {
            search: "stem".into(),
            ..Default::default()
        };
        let padded = FilterCriteria {
            search: "  stem".into(),
            ..Default::default()
        };
        assert!(!filter_trials(&TRIALS, &trimmed).is_empty());
        assert!(filter_trials(&TRIALS, &padded).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let criteria = FilterCriteria {
            condition: "parkinson".into(),
            phase: "Phase 2".into(),
            ..Default::default()
        };
        assert!(filter_trials(&TRIALS, &criteria).is_empty());
    }

    #[test]
    fn toggles_narrow_by_status_and_participation() {
        let recruiting = FilterCriteria {
            recruiting_only: true,
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_trials(&TRIALS, &recruiting)),
            vec!["NCT04713839", "NCT05116540", "NCT04815005"]
        );

        let remote = FilterCriteria {
            virtual_only: true,
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_trials(&TRIALS, &remote)),
            vec!["NCT04713839", "NCT05388461"]
        );
    }
}
