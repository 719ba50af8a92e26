use axum::{
    extract::State,
    Json,
};

use crate::domain::Project;
use crate::error::LaunchpadResult;
use crate::handlers::extract::ApiPath;
use crate::handlers::AppState;
use crate::models::ProjectsResponse;
use crate::services::project_service;

/// Handler for GET /projects - Every startup as a project view-model
pub async fn get_projects(State(state): State<AppState>) -> LaunchpadResult<Json<ProjectsResponse>> {
    let response = project_service::list_projects(&state).await?;
    Ok(Json(response))
}

/// Handler for GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> LaunchpadResult<Json<Project>> {
    let project = project_service::get_project(&state, id).await?;
    Ok(Json(project))
}
