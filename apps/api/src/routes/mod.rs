pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::interests::handlers as interests;
use crate::matching::handlers as matching;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route(
            "/api/v1/quiz/:variant/questions",
            get(quiz::handle_get_questions),
        )
        .route("/api/v1/quiz/:variant/submit", post(quiz::handle_submit_quiz))
        .route(
            "/api/v1/quiz/result",
            get(quiz::handle_get_quiz_result).delete(quiz::handle_retake_quiz),
        )
        .route("/api/v1/hybrid-careers", get(quiz::handle_hybrid_careers))
        // Interests API
        .route(
            "/api/v1/interests",
            get(interests::handle_list_interests).post(interests::handle_create_interest),
        )
        .route(
            "/api/v1/interests/:id",
            put(interests::handle_update_interest).delete(interests::handle_delete_interest),
        )
        // Matching API
        .route("/api/v1/search-terms", get(matching::handle_search_terms))
        .route("/api/v1/listings/rank", post(matching::handle_rank_listings))
        .with_state(state)
}
