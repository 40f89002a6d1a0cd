//! Axum route handlers for the Quiz API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::query::UserIdQuery;
use crate::models::quiz::QuizResult;
use crate::quiz::catalog::{hybrid_careers, CareerCategory, Question, QuizVariant};
use crate::quiz::ranking::build_quiz_result;
use crate::quiz::scoring::tally_answers;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub variant: QuizVariant,
    pub categories: &'static [CareerCategory],
    pub questions: &'static [Question],
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub user_id: Uuid,
    /// One entry per question; `null` for unanswered.
    pub answers: Vec<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct HybridQuery {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Serialize)]
pub struct HybridResponse {
    pub primary: String,
    pub secondary: String,
    pub hybrid_careers: Vec<String>,
}

fn parse_variant(raw: &str) -> Result<QuizVariant, AppError> {
    QuizVariant::parse(raw)
        .ok_or_else(|| AppError::Validation(format!("Unknown quiz variant '{raw}'")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/:variant/questions
pub async fn handle_get_questions(
    Path(variant): Path<String>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let variant = parse_variant(&variant)?;
    Ok(Json(QuestionsResponse {
        variant,
        categories: variant.categories(),
        questions: variant.questions(),
    }))
}

/// POST /api/v1/quiz/:variant/submit
///
/// Scores the answers, stores the result as the user's current quiz result
/// (replacing any earlier attempt), and returns it.
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Json(request): Json<SubmitQuizRequest>,
) -> Result<Json<QuizResult>, AppError> {
    let variant = parse_variant(&variant)?;

    let question_count = variant.questions().len();
    if request.answers.len() > question_count {
        return Err(AppError::Validation(format!(
            "Expected at most {question_count} answers, got {}",
            request.answers.len()
        )));
    }
    if tally_answers(variant, &request.answers).iter().sum::<u32>() == 0 {
        return Err(AppError::Validation(
            "None of the answers match the quiz options".to_string(),
        ));
    }

    let result = build_quiz_result(variant, &request.answers);
    state
        .store
        .save_quiz_result(request.user_id, &result)
        .await?;

    info!(
        user_id = %request.user_id,
        variant = variant.as_str(),
        primary = %result.primary_type.category,
        secondary = %result.secondary_type.category,
        "Quiz completed"
    );

    Ok(Json(result))
}

/// GET /api/v1/quiz/result
pub async fn handle_get_quiz_result(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<QuizResult>, AppError> {
    state
        .store
        .get_quiz_result(params.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("No quiz result for user {}", params.user_id))
        })
}

/// DELETE /api/v1/quiz/result
///
/// Discards the stored result so the user can retake the quiz.
pub async fn handle_retake_quiz(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let existed = state.store.clear_quiz_result(params.user_id).await?;
    info!(user_id = %params.user_id, existed, "Quiz result cleared for retake");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/hybrid-careers
pub async fn handle_hybrid_careers(Query(params): Query<HybridQuery>) -> Json<HybridResponse> {
    let careers = hybrid_careers(&params.primary, &params.secondary)
        .iter()
        .map(|c| c.to_string())
        .collect();
    Json(HybridResponse {
        primary: params.primary,
        secondary: params.secondary,
        hybrid_careers: careers,
    })
}
