// Startup team members

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use tracing::info;

use crate::entity::team_members;
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::handlers::AppState;
use crate::models::{clean_optional, CreateTeamMemberRequest, TeamResponse};
use crate::services::startup_service;

pub async fn get_team(state: &AppState, startup_id: i32) -> LaunchpadResult<TeamResponse> {
    // 404 for unknown startups instead of an empty team
    startup_service::get_startup(state, startup_id).await?;

    let members = state
        .repositories
        .team_member
        .find_by_startup(startup_id)
        .await?;

    Ok(TeamResponse {
        startup_id,
        members,
    })
}

pub async fn add_member(
    state: &AppState,
    startup_id: i32,
    request: CreateTeamMemberRequest,
) -> LaunchpadResult<team_members::Model> {
    request.validate().map_err(LaunchpadError::InvalidRequest)?;
    startup_service::get_startup(state, startup_id).await?;

    let member = team_members::ActiveModel {
        startup_id: Set(startup_id),
        name: Set(request.name.trim().to_string()),
        role: Set(request.role.trim().to_string()),
        linkedin: Set(clean_optional(request.linkedin)),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let created = state.repositories.team_member.create(member).await?;
    info!("Added team member {} to startup {}", created.id, startup_id);
    Ok(created)
}
