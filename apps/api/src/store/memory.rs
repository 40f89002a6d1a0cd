use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interest::Interest;
use crate::models::quiz::QuizResult;
use crate::store::ProfileStore;

/// In-process profile store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryProfileStore {
    quiz_results: RwLock<HashMap<Uuid, QuizResult>>,
    interests: RwLock<HashMap<Uuid, Vec<Interest>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_quiz_result(&self, user_id: Uuid) -> Result<Option<QuizResult>, AppError> {
        Ok(self.quiz_results.read().await.get(&user_id).cloned())
    }

    async fn save_quiz_result(&self, user_id: Uuid, result: &QuizResult) -> Result<(), AppError> {
        self.quiz_results
            .write()
            .await
            .insert(user_id, result.clone());
        Ok(())
    }

    async fn clear_quiz_result(&self, user_id: Uuid) -> Result<bool, AppError> {
        Ok(self.quiz_results.write().await.remove(&user_id).is_some())
    }

    async fn list_interests(&self, user_id: Uuid) -> Result<Vec<Interest>, AppError> {
        Ok(self
            .interests
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_interest(&self, interest: Interest) -> Result<Interest, AppError> {
        self.interests
            .write()
            .await
            .entry(interest.user_id)
            .or_default()
            .push(interest.clone());
        Ok(interest)
    }

    async fn update_interest(
        &self,
        user_id: Uuid,
        id: Uuid,
        category: String,
        subcategories: String,
    ) -> Result<Option<Interest>, AppError> {
        let mut guard = self.interests.write().await;
        let updated = guard
            .get_mut(&user_id)
            .and_then(|list| list.iter_mut().find(|i| i.id == id))
            .map(|existing| {
                existing.category = category;
                existing.subcategories = subcategories;
                existing.clone()
            });
        Ok(updated)
    }

    async fn delete_interest(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut guard = self.interests.write().await;
        let Some(list) = guard.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|i| i.id != id);
        Ok(list.len() != before)
    }
}
