// Builder / investor accounts and the dashboard

use chrono::Utc;
use sea_orm::{ActiveValue::Set, IntoActiveModel};
use tracing::{info, warn};
use uuid::Uuid;

use crate::entity::users;
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::handlers::AppState;
use crate::models::{
    CreateUserRequest, DashboardResponse, InvestorsResponse, LinkWalletRequest, UserRole,
};
use crate::services::leaderboard_service;

/// Number of leaderboard entries on an investor dashboard
pub const DASHBOARD_TOP_STARTUPS: usize = 10;

pub async fn create_user(
    state: &AppState,
    request: CreateUserRequest,
) -> LaunchpadResult<users::Model> {
    let email = request.validate().map_err(LaunchpadError::InvalidRequest)?;

    if state.repositories.user.find_by_email(&email).await?.is_some() {
        return Err(LaunchpadError::Conflict(format!(
            "An account for {} already exists",
            email
        )));
    }

    let now = Utc::now();
    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        display_name: Set(request.display_name.trim().to_string()),
        role: Set(request.role.as_str().to_string()),
        wallet_address: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = state.repositories.user.create(user).await?;
    info!("Registered {} {}", created.role, created.id);
    Ok(created)
}

pub async fn get_user(state: &AppState, id: Uuid) -> LaunchpadResult<users::Model> {
    state
        .repositories
        .user
        .find_by_id(id)
        .await?
        .ok_or_else(|| LaunchpadError::NotFound(format!("User {} not found", id)))
}

/// Stores a wallet address for the user. Only the address format is checked.
pub async fn link_wallet(
    state: &AppState,
    id: Uuid,
    request: LinkWalletRequest,
) -> LaunchpadResult<users::Model> {
    let address = request.validate().map_err(LaunchpadError::InvalidRequest)?;
    let mut user = get_user(state, id).await?.into_active_model();

    user.wallet_address = Set(Some(address));
    user.updated_at = Set(Utc::now());

    let updated = state.repositories.user.update(user).await?;
    info!("Linked wallet for user {}", updated.id);
    Ok(updated)
}

pub async fn list_investors(state: &AppState) -> LaunchpadResult<InvestorsResponse> {
    let investors = state
        .repositories
        .user
        .find_by_role(UserRole::Investor.as_str())
        .await?;

    Ok(InvestorsResponse { investors })
}

/// Builders see their own startups with their overall rank; investors see the top of the leaderboard
pub async fn get_dashboard(state: &AppState, id: Uuid) -> LaunchpadResult<DashboardResponse> {
    let user = get_user(state, id).await?;
    let role = user.role.parse::<UserRole>().unwrap_or_else(|err| {
        warn!("User {} has {}, treating as builder", user.id, err);
        UserRole::Builder
    });

    let leaderboard = leaderboard_service::ranked_startups(state, None).await?;
    let startups = match role {
        UserRole::Builder => leaderboard
            .into_iter()
            .filter(|entry| entry.startup.submitted_by == Some(user.id))
            .collect(),
        UserRole::Investor => leaderboard
            .into_iter()
            .take(DASHBOARD_TOP_STARTUPS)
            .collect(),
    };

    Ok(DashboardResponse {
        user,
        role,
        startups,
    })
}
