use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interest::Interest;
use crate::models::quiz::QuizResult;
use crate::store::ProfileStore;

/// PostgreSQL-backed profile store. Quiz results are one JSONB row per user.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_quiz_result(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError> {
        let row: Option<Json<QuizResult>> =
            sqlx::query_scalar("SELECT result FROM quiz_results WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|Json(result)| result))
    }

    async fn save_quiz_result(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO quiz_results (user_id, variant, result, completed_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                variant = EXCLUDED.variant,
                result = EXCLUDED.result,
                completed_at = EXCLUDED.completed_at
            "#,
        )
        .bind(user_id)
        .bind(result.variant.as_str())
        .bind(Json(result))
        .bind(result.completed_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn clear_quiz_result(&self, user_id: Uuid) -> Result<bool, AppError> {
        let done = sqlx::query("DELETE FROM quiz_results WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    async fn list_interests(&self, user_id: Uuid) -> Result<Vec<Interest>, AppError> {
        let rows = sqlx::query_as::<_, Interest>(
            "SELECT * FROM interests WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn add_interest(&self, interest: Interest) -> Result<Interest, AppError> {
        let row = sqlx::query_as::<_, Interest>(
            r#"
            INSERT INTO interests (id, user_id, category, subcategories, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(interest.id)
        .bind(interest.user_id)
        .bind(&interest.category)
        .bind(&interest.subcategories)
        .bind(interest.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_interest(
        &self,
        user_id: Uuid,
        id: Uuid,
        category: String,
        subcategories: String,
    ) -> Result<Option<Interest>, AppError> {
        let row = sqlx::query_as::<_, Interest>(
            r#"
            UPDATE interests SET category = $1, subcategories = $2
            WHERE id = $3 AND user_id = $4
            RETURNING *
            "#,
        )
        .bind(category)
        .bind(subcategories)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_interest(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let done = sqlx::query("DELETE FROM interests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}
