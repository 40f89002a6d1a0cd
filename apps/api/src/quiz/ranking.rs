//! Category ranking and quiz-result assembly.

use chrono::Utc;

use crate::models::quiz::{CategoryScore, QuizResult, TypeScore};
use crate::quiz::catalog::{hybrid_careers, QuizVariant};
use crate::quiz::scoring::{dominant_index, normalize_counts, tally_answers, CategoryPercentages};

/// Category indices sorted by percentage, highest first.
/// Ties keep the variant's category order.
pub fn rank_categories(percentages: &CategoryPercentages) -> [usize; 4] {
    let mut order = [0, 1, 2, 3];
    order.sort_by(|&a, &b| percentages[b].cmp(&percentages[a]));
    order
}

/// Full pipeline for one quiz attempt: tally → normalize → rank → hybrid lookup.
pub fn build_quiz_result(variant: QuizVariant, answers: &[Option<String>]) -> QuizResult {
    let counts = tally_answers(variant, answers);
    let percentages = normalize_counts(&counts);
    let order = rank_categories(&percentages);
    let categories = variant.categories();

    let primary = &categories[order[0]];
    let secondary = &categories[order[1]];

    // no counted answers means no real primary/secondary pair to combine
    let hybrid = match dominant_index(&counts) {
        Some(_) => hybrid_careers(primary.key, secondary.key)
            .iter()
            .map(|c| c.to_string())
            .collect(),
        None => Vec::new(),
    };

    let category_scores = categories
        .iter()
        .zip(percentages)
        .map(|(cat, percentage)| CategoryScore {
            category: cat.key.to_string(),
            name: cat.name.to_string(),
            color: cat.color.to_string(),
            percentage,
        })
        .collect();

    QuizResult {
        variant,
        primary_type: TypeScore::from_category(primary, percentages[order[0]]),
        secondary_type: TypeScore::from_category(secondary, percentages[order[1]]),
        hybrid_careers: hybrid,
        categories: category_scores,
        completed_at: Utc::now(),
    }
}
