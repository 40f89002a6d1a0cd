use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::catalog::{CareerCategory, QuizVariant};

/// Normalized score for one category. Percentages across a result sum to 100
/// whenever at least one answer was counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub name: String,
    pub color: String,
    pub percentage: u32,
}

/// A ranked category with its static descriptor copied in, as shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScore {
    pub category: String,
    pub name: String,
    pub color: String,
    pub description: String,
    pub careers: Vec<String>,
    pub score: u32,
}

impl TypeScore {
    pub fn from_category(category: &CareerCategory, score: u32) -> Self {
        Self {
            category: category.key.to_string(),
            name: category.name.to_string(),
            color: category.color.to_string(),
            description: category.description.to_string(),
            careers: category.careers.iter().map(|c| c.to_string()).collect(),
            score,
        }
    }
}

/// Outcome of a completed quiz. Created once per attempt and replaced on retake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub variant: QuizVariant,
    pub primary_type: TypeScore,
    pub secondary_type: TypeScore,
    pub hybrid_careers: Vec<String>,
    pub categories: Vec<CategoryScore>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Personality labels used for job-category matching: the top two category names.
    pub fn personality_labels(&self) -> [&str; 2] {
        [
            self.primary_type.name.as_str(),
            self.secondary_type.name.as_str(),
        ]
    }
}
