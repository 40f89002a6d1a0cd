//! Interest/personality → job-category mapper.
//!
//! Matching is case-insensitive and bidirectional: two terms match when either
//! contains the other. Terms shorter than three characters (e.g. "AI") only
//! match exactly, so they cannot hit inside unrelated words.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::matching::mapping::{CareerCategoryMapping, CAREER_CATEGORY_MAPPINGS};
use crate::models::interest::Interest;
use crate::models::quiz::QuizResult;

const MIN_CONTAINED_LEN: usize = 3;

/// Outcome of mapping a user's quiz result and interests to job categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    /// Neither a quiz result nor any interests exist: the quiz was not completed.
    NoData,
    /// Data exists but nothing in it matched a job category.
    NoMatch,
    /// Matched job-category names.
    Matched(BTreeSet<String>),
}

/// Serializable status label for a `CategoryMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    QuizNotCompleted,
    NoMatch,
    Matched,
}

impl CategoryMatch {
    pub fn status(&self) -> MatchStatus {
        match self {
            CategoryMatch::NoData => MatchStatus::QuizNotCompleted,
            CategoryMatch::NoMatch => MatchStatus::NoMatch,
            CategoryMatch::Matched(_) => MatchStatus::Matched,
        }
    }

    /// Matched names, empty for the non-matching outcomes.
    pub fn categories(&self) -> Vec<String> {
        match self {
            CategoryMatch::Matched(set) => set.iter().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// Maps a quiz result's personality labels and the user's interests to job categories.
pub fn match_quiz_results_to_categories(
    quiz: Option<&QuizResult>,
    interests: &[Interest],
) -> CategoryMatch {
    if quiz.is_none() && interests.is_empty() {
        return CategoryMatch::NoData;
    }

    let mut matched = BTreeSet::new();

    if let Some(result) = quiz {
        for label in result.personality_labels() {
            for mapping in CAREER_CATEGORY_MAPPINGS {
                if mapping.traits.iter().any(|t| terms_overlap(label, t)) {
                    matched.insert(mapping.name.to_string());
                }
            }
        }
    }

    for interest in interests {
        let texts = std::iter::once(interest.category.as_str()).chain(interest.subcategory_terms());
        for text in texts {
            for mapping in CAREER_CATEGORY_MAPPINGS {
                if interest_matches(text, mapping) {
                    matched.insert(mapping.name.to_string());
                }
            }
        }
    }

    debug!(
        has_quiz = quiz.is_some(),
        interests = interests.len(),
        matched = matched.len(),
        "Mapped profile to job categories"
    );

    if matched.is_empty() {
        CategoryMatch::NoMatch
    } else {
        CategoryMatch::Matched(matched)
    }
}

fn interest_matches(text: &str, mapping: &CareerCategoryMapping) -> bool {
    terms_overlap(text, mapping.name)
        || mapping.traits.iter().any(|t| terms_overlap(text, t))
        || mapping.keywords.iter().any(|k| terms_overlap(text, k))
}

/// Case-insensitive bidirectional containment.
fn terms_overlap(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    short.chars().count() >= MIN_CONTAINED_LEN && long.contains(short.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::QuizVariant;
    use crate::quiz::ranking::build_quiz_result;
    use uuid::Uuid;

    fn interest(category: &str, subcategories: &str) -> Interest {
        Interest::new(Uuid::new_v4(), category.to_string(), subcategories.to_string())
    }

    fn quiz_with(variant: QuizVariant, picks: &[usize]) -> QuizResult {
        let answers: Vec<Option<String>> = variant
            .questions()
            .iter()
            .zip(picks)
            .map(|(q, &i)| Some(q.options[i].to_string()))
            .collect();
        build_quiz_result(variant, &answers)
    }

    fn matched(outcome: CategoryMatch) -> BTreeSet<String> {
        match outcome {
            CategoryMatch::Matched(set) => set,
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_no_data_when_nothing_present() {
        assert_eq!(match_quiz_results_to_categories(None, &[]), CategoryMatch::NoData);
    }

    #[test]
    fn test_technology_interest_without_quiz() {
        let set = matched(match_quiz_results_to_categories(
            None,
            &[interest("Technology", "AI")],
        ));
        assert!(set.contains("Technology"));
    }

    #[test]
    fn test_unmatched_interest_reports_no_match() {
        let outcome = match_quiz_results_to_categories(None, &[interest("Knitting", "yarn")]);
        assert_eq!(outcome, CategoryMatch::NoMatch);
        assert_eq!(outcome.status(), MatchStatus::NoMatch);
        assert!(outcome.categories().is_empty());
    }

    #[test]
    fn test_quiz_labels_match_traits() {
        // creative primary, analytical secondary
        let quiz = quiz_with(QuizVariant::Career, &[1, 1, 1, 1, 0, 0]);
        let set = matched(match_quiz_results_to_categories(Some(&quiz), &[]));
        assert!(set.contains("Creative Arts"));
        assert!(set.contains("Technology"));
        assert!(set.contains("Science"));
        assert!(!set.contains("Leadership & Management"));
    }

    #[test]
    fn test_leadership_labels_match_traits() {
        // directive primary, transformational secondary
        let quiz = quiz_with(QuizVariant::Leadership, &[3, 3, 3, 0, 0]);
        let set = matched(match_quiz_results_to_categories(Some(&quiz), &[]));
        assert!(set.contains("Leadership & Management"));
        assert!(set.contains("Engineering"));
    }

    #[test]
    fn test_subcategory_keywords_match() {
        let set = matched(match_quiz_results_to_categories(
            None,
            &[interest("Hobbies", "photography, robotics")],
        ));
        assert!(set.contains("Creative Arts"));
        assert!(set.contains("Engineering"));
    }

    #[test]
    fn test_containment_is_bidirectional() {
        // "web development" contains the interest text
        let set = matched(match_quiz_results_to_categories(None, &[interest("web", "")]));
        assert!(set.contains("Technology"));

        // interest text contains the keyword "medical"
        let set = matched(match_quiz_results_to_categories(
            None,
            &[interest("Pre-medical studies", "")],
        ));
        assert!(set.contains("Healthcare"));
    }

    #[test]
    fn test_short_terms_match_exactly_only() {
        // "ai" must not hit inside "retail"
        let outcome = match_quiz_results_to_categories(None, &[interest("retail", "")]);
        assert_eq!(outcome, CategoryMatch::NoMatch);

        let set = matched(match_quiz_results_to_categories(None, &[interest("Hobby", "ai")]));
        assert!(set.contains("Technology"));
    }

    #[test]
    fn test_terms_overlap_rules() {
        assert!(terms_overlap("Analytical", "analytical"));
        assert!(terms_overlap("data", "Big Data"));
        assert!(!terms_overlap("", "data"));
        assert!(!terms_overlap("it", "writing"));
    }
}
