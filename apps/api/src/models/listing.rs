use serde::{Deserialize, Serialize};

/// A job or internship listing as returned by a third-party job board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A listing with its relevance score against the user's search terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: JobListing,
    pub relevance: u32,
    pub matched_terms: Vec<String>,
}
