//! Profile store — the single authoritative home for a user's quiz result and interests.
//!
//! Backends:
//! - `PgProfileStore` — PostgreSQL, used when `DATABASE_URL` is set.
//! - `MemoryProfileStore` — process-local, used otherwise and in tests.
//!
//! `CachedProfileStore` optionally fronts either backend with a write-through
//! Redis cache (`RedisQuizCache`) for quiz results.
//! `AppState` holds an `Arc<dyn ProfileStore>`, chosen at startup from config.

pub mod cache;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interest::Interest;
use crate::models::quiz::QuizResult;

pub use cache::{CachedProfileStore, RedisQuizCache};
pub use memory::MemoryProfileStore;
pub use postgres::PgProfileStore;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_quiz_result(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError>;

    /// Replaces any previous result for the user.
    async fn save_quiz_result(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError>;

    /// Discards the stored result. Returns `false` if there was none.
    async fn clear_quiz_result(&self, user_id: Uuid) -> Result<bool, AppError>;

    /// Interests in creation order.
    async fn list_interests(&self, user_id: Uuid) -> Result<Vec<Interest>, AppError>;

    async fn add_interest(&self, interest: Interest) -> Result<Interest, AppError>;

    /// Returns `None` if the interest does not exist or belongs to another user.
    async fn update_interest(
        &self,
        user_id: Uuid,
        id: Uuid,
        category: String,
        subcategories: String,
    ) -> Result<Option<Interest>, AppError>;

    async fn delete_interest(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}
