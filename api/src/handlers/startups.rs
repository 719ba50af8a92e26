// Handlers for startup listing and submission endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::entity::startups;
use crate::error::LaunchpadResult;
use crate::handlers::extract::{ApiJson, ApiPath, ApiQuery};
use crate::handlers::AppState;
use crate::models::{
    CreateStartupRequest, ListStartupsQuery, PaginatedResponse, StartupsResponse,
    UpdateStartupRequest,
};
use crate::services::startup_service;

/// Handler for GET /startups - Returns one page of startups, newest first
pub async fn get_startups(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListStartupsQuery>,
) -> LaunchpadResult<Json<PaginatedResponse<StartupsResponse>>> {
    let response = startup_service::list_startups(&state, &params).await?;
    Ok(Json(response))
}

/// Handler for GET /startups/{id}
pub async fn get_startup(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> LaunchpadResult<Json<startups::Model>> {
    let startup = startup_service::get_startup(&state, id).await?;
    Ok(Json(startup))
}

/// Handler for POST /startups - Submits a new startup
pub async fn create_startup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateStartupRequest>,
) -> LaunchpadResult<(StatusCode, Json<startups::Model>)> {
    let startup = startup_service::create_startup(&state, request).await?;
    Ok((StatusCode::CREATED, Json(startup)))
}

/// Handler for PUT /startups/{id}
pub async fn update_startup(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateStartupRequest>,
) -> LaunchpadResult<Json<startups::Model>> {
    let startup = startup_service::update_startup(&state, id, request).await?;
    Ok(Json(startup))
}

/// Handler for DELETE /startups/{id}
pub async fn delete_startup(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> LaunchpadResult<StatusCode> {
    startup_service::delete_startup(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
