use axum::{
    extract::State,
    Json,
};

use crate::error::LaunchpadResult;
use crate::handlers::extract::ApiQuery;
use crate::handlers::AppState;
use crate::models::{LeaderboardQuery, LeaderboardResponse};
use crate::services::leaderboard_service;

/// Handler for GET /leaderboard - Startups ranked by growth, recomputed on every request
pub async fn get_leaderboard(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LeaderboardQuery>,
) -> LaunchpadResult<Json<LeaderboardResponse>> {
    let response = leaderboard_service::get_leaderboard(&state, &params).await?;
    Ok(Json(response))
}
