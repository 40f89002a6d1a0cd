//! Axum route handlers for the Interests API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interest::Interest;
use crate::models::query::UserIdQuery;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateInterestRequest {
    pub user_id: Uuid,
    pub category: String,
    #[serde(default)]
    pub subcategories: String,
}

#[derive(Deserialize)]
pub struct UpdateInterestRequest {
    pub user_id: Uuid,
    pub category: String,
    #[serde(default)]
    pub subcategories: String,
}

fn validated_category(category: &str) -> Result<String, AppError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }
    Ok(category.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/interests
pub async fn handle_list_interests(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Interest>>, AppError> {
    Ok(Json(state.store.list_interests(params.user_id).await?))
}

/// POST /api/v1/interests
pub async fn handle_create_interest(
    State(state): State<AppState>,
    Json(req): Json<CreateInterestRequest>,
) -> Result<(StatusCode, Json<Interest>), AppError> {
    let category = validated_category(&req.category)?;
    let interest = Interest::new(req.user_id, category, req.subcategories.trim().to_string());
    let created = state.store.add_interest(interest).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/interests/:id
pub async fn handle_update_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateInterestRequest>,
) -> Result<Json<Interest>, AppError> {
    let category = validated_category(&req.category)?;
    state
        .store
        .update_interest(req.user_id, id, category, req.subcategories.trim().to_string())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Interest {id} not found")))
}

/// DELETE /api/v1/interests/:id
pub async fn handle_delete_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_interest(params.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Interest {id} not found")))
    }
}
