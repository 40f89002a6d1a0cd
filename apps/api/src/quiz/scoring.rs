//! Answer tally and score normalization.
//!
//! Counts and percentages are indexed by the variant's fixed category order.

use tracing::debug;

use crate::quiz::catalog::QuizVariant;

/// Raw answer counts per category, in the variant's category order.
pub type CategoryCounts = [u32; 4];

/// Integer percentages per category, in the variant's category order.
pub type CategoryPercentages = [u32; 4];

/// Tallies selected answers into raw category counts.
///
/// `answers[i]` is the option text chosen for question `i`. Unanswered
/// questions, answers that are not one of the question's options, and answers
/// past the last question are skipped.
pub fn tally_answers(variant: QuizVariant, answers: &[Option<String>]) -> CategoryCounts {
    let mut counts = [0u32; 4];
    let mut skipped = 0usize;

    for (question, answer) in variant.questions().iter().zip(answers) {
        match answer.as_deref().and_then(|a| question.option_index(a)) {
            Some(idx) => counts[idx] += 1,
            None => skipped += 1,
        }
    }

    let overflow = answers.len().saturating_sub(variant.questions().len());
    if skipped > 0 || overflow > 0 {
        debug!(
            variant = variant.as_str(),
            skipped, overflow, "Ignored answers while tallying quiz"
        );
    }

    counts
}

/// Converts raw counts to percentages that sum to exactly 100.
///
/// Each bucket is `round(count / total * 100)`; any rounding drift is absorbed
/// by the largest bucket. With no counted answers every bucket is 0.
pub fn normalize_counts(counts: &CategoryCounts) -> CategoryPercentages {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return [0; 4];
    }

    let mut percentages = [0u32; 4];
    for (pct, &count) in percentages.iter_mut().zip(counts) {
        *pct = ((count as f64 / total as f64) * 100.0).round() as u32;
    }

    let sum: i64 = percentages.iter().map(|&p| p as i64).sum();
    let drift = 100 - sum;
    if drift != 0 {
        // largest bucket is at least 25%, so a drift of at most 2 never underflows
        let idx = dominant_index(counts).unwrap_or(0);
        percentages[idx] = (percentages[idx] as i64 + drift) as u32;
    }

    percentages
}

/// Index of the highest count; the first category wins ties.
/// Returns `None` when nothing was counted.
pub fn dominant_index(counts: &CategoryCounts) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        match best {
            Some(b) if counts[b] >= count => {}
            _ => best = Some(idx),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers_for(variant: QuizVariant, picks: &[usize]) -> Vec<Option<String>> {
        variant
            .questions()
            .iter()
            .zip(picks)
            .map(|(q, &i)| Some(q.options[i].to_string()))
            .collect()
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let counts = tally_answers(QuizVariant::Career, &[]);
        assert_eq!(counts, [0, 0, 0, 0]);
        assert_eq!(normalize_counts(&counts), [0, 0, 0, 0]);
        assert_eq!(dominant_index(&counts), None);
    }

    #[test]
    fn test_all_first_option_scores_first_category_100() {
        for variant in [QuizVariant::Career, QuizVariant::Leadership] {
            let picks = vec![0; variant.questions().len()];
            let counts = tally_answers(variant, &answers_for(variant, &picks));
            assert_eq!(normalize_counts(&counts), [100, 0, 0, 0]);
        }
    }

    #[test]
    fn test_unknown_and_missing_answers_are_skipped() {
        let mut answers = answers_for(QuizVariant::Career, &[1, 1, 2]);
        answers.push(None);
        answers.push(Some("Not an option".to_string()));
        let counts = tally_answers(QuizVariant::Career, &answers);
        assert_eq!(counts, [0, 2, 1, 0]);
    }

    #[test]
    fn test_answers_beyond_question_count_are_ignored() {
        let variant = QuizVariant::Leadership;
        let mut answers = answers_for(variant, &vec![3; variant.questions().len()]);
        answers.push(Some(variant.questions()[0].options[0].to_string()));
        let counts = tally_answers(variant, &answers);
        assert_eq!(counts, [0, 0, 0, 9]);
    }

    #[test]
    fn test_percentages_sum_to_100_for_every_short_sequence() {
        // every combination of answers for the first five questions
        let variant = QuizVariant::Career;
        for code in 0..4usize.pow(5) {
            let picks: Vec<usize> = (0..5).map(|i| (code / 4usize.pow(i)) % 4).collect();
            let counts = tally_answers(variant, &answers_for(variant, &picks));
            let pct = normalize_counts(&counts);
            assert_eq!(pct.iter().sum::<u32>(), 100, "picks {picks:?} gave {pct:?}");
        }
    }

    #[test]
    fn test_rounding_drift_goes_to_largest_bucket() {
        // 1/3 each over three buckets rounds to 33+33+33 = 99
        let pct = normalize_counts(&[1, 1, 1, 0]);
        assert_eq!(pct, [34, 33, 33, 0]);

        // 3/6 and 1/6 ×3 rounds to 50 + 17×3 = 101
        let pct = normalize_counts(&[3, 1, 1, 1]);
        assert_eq!(pct, [49, 17, 17, 17]);

        // the correction follows the largest bucket, not the first one
        let pct = normalize_counts(&[1, 3, 1, 1]);
        assert_eq!(pct, [17, 49, 17, 17]);
    }

    #[test]
    fn test_dominant_index_first_wins_ties() {
        assert_eq!(dominant_index(&[2, 3, 3, 1]), Some(1));
        assert_eq!(dominant_index(&[4, 4, 4, 4]), Some(0));
        assert_eq!(dominant_index(&[0, 0, 0, 1]), Some(3));
    }
}
