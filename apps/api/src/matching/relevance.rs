//! Ranks third-party job listings against synthesized search terms.
//!
//! Scoring per listing:
//! - job title found in listing title → +3
//! - keyword in listing title → +2
//! - keyword in description → +1
//!
//! Terms match whole words only: "intern" does not hit "International" and
//! "AI" does not hit "Retail". Multi-word terms must appear as consecutive words.
//! Zero-score listings are dropped; the rest sort by score, highest first,
//! keeping provider order among equals.

use crate::matching::search_terms::SearchTerms;
use crate::models::listing::{JobListing, RankedListing};

const TITLE_MATCH_WEIGHT: u32 = 3;
const KEYWORD_IN_TITLE_WEIGHT: u32 = 2;
const KEYWORD_IN_DESCRIPTION_WEIGHT: u32 = 1;

pub fn rank_listings(listings: Vec<JobListing>, terms: &SearchTerms) -> Vec<RankedListing> {
    let mut ranked: Vec<RankedListing> = listings
        .into_iter()
        .filter_map(|listing| {
            let (relevance, matched_terms) = score_listing(&listing, terms);
            (relevance > 0).then_some(RankedListing {
                listing,
                relevance,
                matched_terms,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked
}

fn score_listing(listing: &JobListing, terms: &SearchTerms) -> (u32, Vec<String>) {
    let title = words(&listing.title);
    let description = listing.description.as_deref().map(words).unwrap_or_default();

    let mut score = 0;
    let mut matched = Vec::new();

    for job_title in &terms.job_titles {
        if contains_phrase(&title, job_title) {
            score += TITLE_MATCH_WEIGHT;
            matched.push(job_title.clone());
        }
    }

    for keyword in &terms.keywords {
        let mut hit = false;
        if contains_phrase(&title, keyword) {
            score += KEYWORD_IN_TITLE_WEIGHT;
            hit = true;
        }
        if contains_phrase(&description, keyword) {
            score += KEYWORD_IN_DESCRIPTION_WEIGHT;
            hit = true;
        }
        if hit {
            matched.push(keyword.clone());
        }
    }

    (score, matched)
}

/// Lower-cased alphanumeric words; punctuation and hyphens split words.
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when every word of `phrase` appears consecutively in `haystack`.
fn contains_phrase(haystack: &[String], phrase: &str) -> bool {
    let needle = words(phrase);
    if needle.is_empty() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::search_terms::job_search_terms;

    fn listing(title: &str, description: Option<&str>) -> JobListing {
        JobListing {
            title: title.to_string(),
            company: None,
            description: description.map(str::to_string),
            url: None,
        }
    }

    fn terms() -> SearchTerms {
        SearchTerms {
            job_titles: vec!["Data Analyst Intern".to_string()],
            keywords: vec!["data".to_string(), "software".to_string()],
        }
    }

    #[test]
    fn test_exact_title_scores_highest() {
        let ranked = rank_listings(
            vec![
                listing("Software Tester", None),
                listing("Data Analyst Intern", Some("Work with data teams")),
            ],
            &terms(),
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].listing.title, "Data Analyst Intern");
        // 3 (title) + 2 + 1 (data in title and description)
        assert_eq!(ranked[0].relevance, 6);
        assert_eq!(ranked[1].relevance, 2);
    }

    #[test]
    fn test_zero_score_listings_are_dropped() {
        let ranked = rank_listings(vec![listing("Barista", Some("Coffee"))], &terms());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_keywords_inside_unrelated_words_do_not_match() {
        let ranked = rank_listings(
            vec![
                listing("Retail Sales Associate", None),
                listing("International Shipping Clerk", None),
                listing("Line Cook", None),
            ],
            &job_search_terms(&["Technology"]),
        );
        assert!(ranked.is_empty(), "unexpected matches: {ranked:?}");
    }

    #[test]
    fn test_intern_keyword_is_scored_once() {
        let terms = job_search_terms(&["Technology"]);
        let ranked = rank_listings(vec![listing("Summer Intern", None)], &terms);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].relevance, KEYWORD_IN_TITLE_WEIGHT);
        assert_eq!(ranked[0].matched_terms, vec!["intern".to_string()]);
    }

    #[test]
    fn test_multi_word_keywords_match_across_punctuation() {
        let terms = SearchTerms {
            job_titles: vec![],
            keywords: vec!["entry level".to_string(), "AI".to_string()],
        };
        let ranked = rank_listings(
            vec![listing("Entry-Level AI Tester", None), listing("Level Entry", None)],
            &terms,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].relevance, 2 * KEYWORD_IN_TITLE_WEIGHT);
    }

    #[test]
    fn test_ties_keep_provider_order() {
        let ranked = rank_listings(
            vec![
                listing("Software Developer", None),
                listing("Data Engineer", None),
            ],
            &terms(),
        );
        assert_eq!(ranked[0].listing.title, "Software Developer");
        assert_eq!(ranked[1].listing.title, "Data Engineer");
    }
}
