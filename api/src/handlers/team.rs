use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::entity::team_members;
use crate::error::LaunchpadResult;
use crate::handlers::extract::{ApiJson, ApiPath};
use crate::handlers::AppState;
use crate::models::{CreateTeamMemberRequest, TeamResponse};
use crate::services::team_service;

/// Handler for GET /startups/{id}/team
pub async fn get_team(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> LaunchpadResult<Json<TeamResponse>> {
    let response = team_service::get_team(&state, id).await?;
    Ok(Json(response))
}

/// Handler for POST /startups/{id}/team
pub async fn add_team_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<CreateTeamMemberRequest>,
) -> LaunchpadResult<(StatusCode, Json<team_members::Model>)> {
    let member = team_service::add_member(&state, id, request).await?;
    Ok((StatusCode::CREATED, Json(member)))
}
