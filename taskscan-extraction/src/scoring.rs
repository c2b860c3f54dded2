//! Heuristic confidence scoring for one extraction.

use taskscan_core::{Confidence, TaskCategory};

/// Base score for any sentence that passes the verb gate.
const BASE_SCORE: f64 = 0.5;
/// Bonus for a resolved due date.
const DUE_DATE_BONUS: f64 = 0.2;
/// Bonus for landing in a specific (non-Other) category.
const CATEGORY_BONUS: f64 = 0.2;
/// Per-verb bonus, capped at one verb's worth.
const VERB_BONUS: f64 = 0.1;
const VERB_BONUS_CAP: f64 = 0.1;
/// Per-keyword bonus for the chosen category, capped at two keywords' worth.
const KEYWORD_BONUS: f64 = 0.05;
const KEYWORD_BONUS_CAP: f64 = 0.1;

/// Score an extraction from its scan outcomes. Clamped to [0.0, 1.0] by
/// construction; with the verb gate passed the floor is effectively 0.6.
pub fn confidence(
    has_due_date: bool,
    category: TaskCategory,
    verb_hits: usize,
    keyword_hits: usize,
) -> Confidence {
    let mut score = BASE_SCORE;

    if has_due_date {
        score += DUE_DATE_BONUS;
    }
    if category != TaskCategory::Other {
        score += CATEGORY_BONUS;
    }
    score += (verb_hits as f64 * VERB_BONUS).min(VERB_BONUS_CAP);
    score += (keyword_hits as f64 * KEYWORD_BONUS).min(KEYWORD_BONUS_CAP);

    Confidence::new(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_verb_only_scores_base_plus_verb_bonus() {
        let c = confidence(false, TaskCategory::Other, 1, 0);
        assert!((c.value() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn verb_bonus_caps_at_one_verb() {
        assert_eq!(
            confidence(false, TaskCategory::Other, 1, 0),
            confidence(false, TaskCategory::Other, 5, 0)
        );
    }

    #[test]
    fn keyword_bonus_caps_at_two_keywords() {
        assert_eq!(
            confidence(false, TaskCategory::Health, 1, 2),
            confidence(false, TaskCategory::Health, 1, 7)
        );
    }

    #[test]
    fn fully_loaded_sentence_clamps_to_one() {
        let c = confidence(true, TaskCategory::Health, 3, 4);
        assert_eq!(c.value(), 1.0);
    }

    #[test]
    fn due_date_and_category_each_add_two_tenths() {
        let base = confidence(false, TaskCategory::Other, 1, 0).value();
        let with_date = confidence(true, TaskCategory::Other, 1, 0).value();
        let with_cat = confidence(false, TaskCategory::Work, 1, 0).value();
        assert!((with_date - base - 0.2).abs() < 1e-9);
        assert!((with_cat - base - 0.2).abs() < 1e-9);
    }
}
