// Handlers for builder/investor accounts

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::entity::users;
use crate::error::LaunchpadResult;
use crate::handlers::extract::{ApiJson, ApiPath};
use crate::handlers::AppState;
use crate::models::{CreateUserRequest, DashboardResponse, InvestorsResponse, LinkWalletRequest};
use crate::services::user_service;

/// Handler for POST /users - Registers a builder or investor
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> LaunchpadResult<(StatusCode, Json<users::Model>)> {
    let user = user_service::create_user(&state, request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> LaunchpadResult<Json<users::Model>> {
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(user))
}

/// Handler for PUT /users/{id}/wallet
pub async fn link_wallet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<LinkWalletRequest>,
) -> LaunchpadResult<Json<users::Model>> {
    let user = user_service::link_wallet(&state, id, request).await?;
    Ok(Json(user))
}

/// Handler for GET /users/{id}/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> LaunchpadResult<Json<DashboardResponse>> {
    let dashboard = user_service::get_dashboard(&state, id).await?;
    Ok(Json(dashboard))
}

/// Handler for GET /investors
pub async fn get_investors(
    State(state): State<AppState>,
) -> LaunchpadResult<Json<InvestorsResponse>> {
    let response = user_service::list_investors(&state).await?;
    Ok(Json(response))
}
