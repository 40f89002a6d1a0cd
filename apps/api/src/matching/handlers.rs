//! Axum route handlers for the Matching API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::mapper::{match_quiz_results_to_categories, CategoryMatch, MatchStatus};
use crate::matching::relevance::rank_listings;
use crate::matching::search_terms::{job_search_terms, SearchTerms};
use crate::models::listing::{JobListing, RankedListing};
use crate::models::query::UserIdQuery;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SearchTermsResponse {
    pub status: MatchStatus,
    pub categories: Vec<String>,
    pub terms: SearchTerms,
}

#[derive(Debug, Deserialize)]
pub struct RankListingsRequest {
    pub user_id: Uuid,
    pub listings: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
pub struct RankListingsResponse {
    pub status: MatchStatus,
    pub terms: SearchTerms,
    pub listings: Vec<RankedListing>,
}

/// Loads the user's profile and runs mapper → synthesizer.
async fn user_search_terms(
    state: &AppState,
    user_id: Uuid,
) -> Result<(CategoryMatch, SearchTerms), AppError> {
    let quiz = state.store.get_quiz_result(user_id).await?;
    let interests = state.store.list_interests(user_id).await?;

    let matched = match_quiz_results_to_categories(quiz.as_ref(), &interests);
    let terms = job_search_terms(&matched.categories());
    Ok((matched, terms))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/search-terms
///
/// Status tells the client how to degrade: `quiz_not_completed` when the user
/// has neither a quiz result nor interests, `no_match` when nothing mapped.
pub async fn handle_search_terms(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SearchTermsResponse>, AppError> {
    let (matched, terms) = user_search_terms(&state, params.user_id).await?;
    Ok(Json(SearchTermsResponse {
        status: matched.status(),
        categories: matched.categories(),
        terms,
    }))
}

/// POST /api/v1/listings/rank
///
/// Ranks listings fetched by the client from a job board against the user's search terms.
pub async fn handle_rank_listings(
    State(state): State<AppState>,
    Json(request): Json<RankListingsRequest>,
) -> Result<Json<RankListingsResponse>, AppError> {
    let (matched, terms) = user_search_terms(&state, request.user_id).await?;
    let listings = rank_listings(request.listings, &terms);
    tracing::debug!(
        user_id = %request.user_id,
        kept = listings.len(),
        "Ranked job listings"
    );
    Ok(Json(RankListingsResponse {
        status: matched.status(),
        terms,
        listings,
    }))
}
