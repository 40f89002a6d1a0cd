//! Write-through cache for quiz results in front of the authoritative profile store.
//!
//! The cache is filled only when a result is saved and evicted when it is
//! cleared. Reads that miss go to the inner store without refilling, so a read
//! racing a retake can never write an out-of-date result back.
//! Cache failures are logged and never fail the request.

use std::sync::Arc;

use async_trait::async_trait;
use redis::Client as RedisClient;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interest::Interest;
use crate::models::quiz::QuizResult;
use crate::store::ProfileStore;

/// Key/value cache for one quiz result per user.
#[async_trait]
pub trait QuizResultCache: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError>;
    async fn put(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError>;
    async fn evict(&self, user_id: Uuid) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Redis backend
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisQuizCache {
    client: RedisClient,
    ttl_secs: u64,
}

impl RedisQuizCache {
    pub fn new(client: RedisClient, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }
}

fn quiz_result_key(user_id: Uuid) -> String {
    format!("aether:quiz_result:{user_id}")
}

#[async_trait]
impl QuizResultCache for RedisQuizCache {
    async fn get(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = redis::cmd("GET")
            .arg(quiz_result_key(user_id))
            .query_async(&mut conn)
            .await?;
        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError> {
        let payload = serde_json::to_string(result)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(quiz_result_key(user_id))
            .arg(payload)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn evict(&self, user_id: Uuid) -> Result<(), AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("DEL")
            .arg(quiz_result_key(user_id))
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cached store
// ────────────────────────────────────────────────────────────────────────────

pub struct CachedProfileStore {
    inner: Arc<dyn ProfileStore>,
    cache: Arc<dyn QuizResultCache>,
}

impl CachedProfileStore {
    pub fn new(inner: Arc<dyn ProfileStore>, cache: Arc<dyn QuizResultCache>) -> Self {
        Self { inner, cache }
    }

    async fn evict_logged(&self, user_id: Uuid) {
        if let Err(e) = self.cache.evict(user_id).await {
            warn!(%user_id, "Quiz result cache evict failed: {e}");
        }
    }
}

#[async_trait]
impl ProfileStore for CachedProfileStore {
    async fn get_quiz_result(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError> {
        match self.cache.get(user_id).await {
            Ok(Some(result)) => {
                debug!(%user_id, "Quiz result cache hit");
                return Ok(Some(result));
            }
            Ok(None) => debug!(%user_id, "Quiz result cache miss"),
            Err(e) => warn!(%user_id, "Quiz result cache read failed: {e}"),
        }
        self.inner.get_quiz_result(user_id).await
    }

    async fn save_quiz_result(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError> {
        self.inner.save_quiz_result(user_id, result).await?;
        if let Err(e) = self.cache.put(user_id, result).await {
            warn!(%user_id, "Quiz result cache write failed: {e}");
            // an older cached entry would otherwise shadow the new result
            self.evict_logged(user_id).await;
        }
        Ok(())
    }

    async fn clear_quiz_result(&self, user_id: Uuid) -> Result<bool, AppError> {
        let existed = self.inner.clear_quiz_result(user_id).await?;
        self.evict_logged(user_id).await;
        Ok(existed)
    }

    async fn list_interests(&self, user_id: Uuid) -> Result<Vec<Interest>, AppError> {
        self.inner.list_interests(user_id).await
    }

    async fn add_interest(&self, interest: Interest) -> Result<Interest, AppError> {
        self.inner.add_interest(interest).await
    }

    async fn update_interest(
        &self,
        user_id: Uuid,
        id: Uuid,
        category: String,
        subcategories: String,
    ) -> Result<Option<Interest>, AppError> {
        self.inner
            .update_interest(user_id, id, category, subcategories)
            .await
    }

    async fn delete_interest(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        self.inner.delete_interest(user_id, id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tokio::sync::Mutex;

    use super::*;
    use crate::quiz::catalog::QuizVariant;
    use crate::quiz::ranking::build_quiz_result;
    use crate::store::MemoryProfileStore;

    #[derive(Default)]
    struct FakeCache {
        entries: Mutex<HashMap<Uuid, QuizResult>>,
    }

    #[async_trait]
    impl QuizResultCache for FakeCache {
        async fn get(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError> {
            Ok(self.entries.lock().await.get(&user_id).cloned())
        }

        async fn put(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError> {
            self.entries.lock().await.insert(user_id, result.clone());
            Ok(())
        }

        async fn evict(&self, user_id: Uuid) -> Result<(), AppError> {
            self.entries.lock().await.remove(&user_id);
            Ok(())
        }
    }

    fn sample_result() -> QuizResult {
        let answers: Vec<Option<String>> = QuizVariant::Career
            .questions()
            .iter()
            .map(|q| Some(q.options[2].to_string()))
            .collect();
        build_quiz_result(QuizVariant::Career, &answers)
    }

    #[test]
    fn test_quiz_result_key_is_namespaced_per_user() {
        let user = Uuid::nil();
        assert_eq!(
            quiz_result_key(user),
            "aether:quiz_result:00000000-0000-0000-0000-000000000000"
        );
    }

    #[tokio::test]
    async fn test_unreachable_redis_falls_through_to_inner_store() {
        let client = RedisClient::open("redis://127.0.0.1:1").unwrap();
        let store = CachedProfileStore::new(
            Arc::new(MemoryProfileStore::new()),
            Arc::new(RedisQuizCache::new(client, 60)),
        );
        let user = Uuid::new_v4();
        let result = sample_result();

        store.save_quiz_result(user, &result).await.unwrap();
        assert_eq!(store.get_quiz_result(user).await.unwrap(), Some(result));
        assert!(store.clear_quiz_result(user).await.unwrap());
        assert!(store.get_quiz_result(user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_writes_through_and_clear_evicts() {
        let cache = Arc::new(FakeCache::default());
        let store = CachedProfileStore::new(Arc::new(MemoryProfileStore::new()), cache.clone());
        let user = Uuid::new_v4();
        let result = sample_result();

        store.save_quiz_result(user, &result).await.unwrap();
        assert_eq!(cache.get(user).await.unwrap(), Some(result.clone()));
        assert_eq!(store.get_quiz_result(user).await.unwrap(), Some(result));

        store.clear_quiz_result(user).await.unwrap();
        assert!(cache.get(user).await.unwrap().is_none());
        assert!(store.get_quiz_result(user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_miss_does_not_refill_cache() {
        let inner: Arc<dyn ProfileStore> = Arc::new(MemoryProfileStore::new());
        let cache = Arc::new(FakeCache::default());
        let store = CachedProfileStore::new(inner.clone(), cache.clone());
        let user = Uuid::new_v4();
        let result = sample_result();

        // stored before the cache existed, e.g. after the entry expired
        inner.save_quiz_result(user, &result).await.unwrap();

        assert_eq!(store.get_quiz_result(user).await.unwrap(), Some(result));
        assert!(cache.get(user).await.unwrap().is_none());

        // a retake right after the read leaves nothing behind to resurrect
        store.clear_quiz_result(user).await.unwrap();
        assert!(store.get_quiz_result(user).await.unwrap().is_none());
    }
}
