//! Search-term synthesizer: matched job categories → job titles and keywords
//! for the external job-search collaborators.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::mapping::{find_mapping, CAREER_CATEGORY_MAPPINGS};

pub const MAX_JOB_TITLES: usize = 5;
pub const MAX_KEYWORDS: usize = 10;

/// Appended whenever at least one category matched. Counted within `MAX_KEYWORDS`.
pub const BOILERPLATE_KEYWORDS: [&str; 3] = ["intern", "internship", "entry level"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTerms {
    pub job_titles: Vec<String>,
    pub keywords: Vec<String>,
}

/// Unions the job titles and keywords of the named categories.
///
/// Categories are visited in table order, so the output does not depend on
/// the order of `categories`. Unknown names are ignored.
pub fn job_search_terms<S: AsRef<str>>(categories: &[S]) -> SearchTerms {
    let wanted: HashSet<&str> = categories
        .iter()
        .filter_map(|c| find_mapping(c.as_ref()))
        .map(|m| m.name)
        .collect();

    let selected: Vec<_> = CAREER_CATEGORY_MAPPINGS
        .iter()
        .filter(|m| wanted.contains(m.name))
        .collect();

    if selected.is_empty() {
        return SearchTerms::default();
    }

    let mut job_titles = Vec::new();
    let mut seen_titles = HashSet::new();
    for title in selected.iter().flat_map(|m| m.job_titles.iter()) {
        if job_titles.len() == MAX_JOB_TITLES {
            break;
        }
        if seen_titles.insert(title.to_lowercase()) {
            job_titles.push(title.to_string());
        }
    }

    let category_budget = MAX_KEYWORDS - BOILERPLATE_KEYWORDS.len();
    let mut keywords = Vec::new();
    let mut seen_keywords = HashSet::new();
    for keyword in selected.iter().flat_map(|m| m.keywords.iter()) {
        if keywords.len() == category_budget {
            break;
        }
        if seen_keywords.insert(keyword.to_lowercase()) {
            keywords.push(keyword.to_string());
        }
    }
    for keyword in BOILERPLATE_KEYWORDS {
        if seen_keywords.insert(keyword.to_string()) {
            keywords.push(keyword.to_string());
        }
    }

    SearchTerms {
        job_titles,
        keywords,
    }
}
