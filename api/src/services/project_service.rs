// Project view-model endpoints

use crate::domain::{to_project, Project};
use crate::error::LaunchpadResult;
use crate::handlers::AppState;
use crate::models::ProjectsResponse;
use crate::services::startup_service;

pub async fn list_projects(state: &AppState) -> LaunchpadResult<ProjectsResponse> {
    let startups = state.repositories.startup.find_all(None).await?;

    Ok(ProjectsResponse {
        projects: startups.iter().map(to_project).collect(),
    })
}

pub async fn get_project(state: &AppState, id: i32) -> LaunchpadResult<Project> {
    let startup = startup_service::get_startup(state, id).await?;
    Ok(to_project(&startup))
}
