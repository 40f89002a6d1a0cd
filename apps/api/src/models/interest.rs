use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user-managed interest. `subcategories` is free text, optionally comma-separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Interest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub subcategories: String,
    pub created_at: DateTime<Utc>,
}

impl Interest {
    pub fn new(user_id: Uuid, category: String, subcategories: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            category,
            subcategories,
            created_at: Utc::now(),
        }
    }

    /// Individual subcategory phrases, trimmed, blanks dropped.
    pub fn subcategory_terms(&self) -> impl Iterator<Item = &str> {
        self.subcategories
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_terms_split_and_trim() {
        let interest = Interest::new(
            Uuid::new_v4(),
            "Technology".to_string(),
            " AI, robotics ,, web ".to_string(),
        );
        let terms: Vec<&str> = interest.subcategory_terms().collect();
        assert_eq!(terms, vec!["AI", "robotics", "web"]);
    }

    #[test]
    fn test_empty_subcategories_yield_nothing() {
        let interest = Interest::new(Uuid::new_v4(), "Art".to_string(), String::new());
        assert_eq!(interest.subcategory_terms().count(), 0);
    }
}
