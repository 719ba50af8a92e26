// Startup listing and submission business logic

use chrono::Utc;
use sea_orm::{ActiveValue::Set, IntoActiveModel};
use tracing::info;

use crate::entity::startups;
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::handlers::AppState;
use crate::models::{
    clean_optional, parse_category_filter, CreateStartupRequest, ListStartupsQuery,
    PaginatedResponse, PaginationMeta, StartupsResponse, UpdateStartupRequest,
};

pub async fn list_startups(
    state: &AppState,
    query: &ListStartupsQuery,
) -> LaunchpadResult<PaginatedResponse<StartupsResponse>> {
    let category = parse_category_filter(query.category.as_deref())
        .map_err(LaunchpadError::InvalidRequest)?;
    let category = category.as_ref().map(|c| c.as_str());
    let pagination = &query.pagination;

    let startups = state
        .repositories
        .startup
        .find_paginated(category, pagination.limit(), pagination.offset())
        .await?;
    let total = state.repositories.startup.count(category).await?;

    Ok(PaginatedResponse {
        data: StartupsResponse { startups },
        pagination: PaginationMeta::new(total, pagination),
    })
}

pub async fn get_startup(state: &AppState, id: i32) -> LaunchpadResult<startups::Model> {
    state
        .repositories
        .startup
        .find_by_id(id)
        .await?
        .ok_or_else(|| LaunchpadError::NotFound(format!("Startup {} not found", id)))
}

pub async fn create_startup(
    state: &AppState,
    request: CreateStartupRequest,
) -> LaunchpadResult<startups::Model> {
    let category = request.validate().map_err(LaunchpadError::InvalidRequest)?;

    if let Some(user_id) = request.submitted_by {
        if state.repositories.user.find_by_id(user_id).await?.is_none() {
            return Err(LaunchpadError::InvalidRequest(format!(
                "submitted_by refers to unknown user {}",
                user_id
            )));
        }
    }

    let now = Utc::now();
    let startup = startups::ActiveModel {
        name: Set(request.name.trim().to_string()),
        description: Set(request.description.trim().to_string()),
        category: Set(category.to_string()),
        stage: Set(clean_optional(request.stage)),
        users: Set(clean_optional(request.users)),
        growth: Set(clean_optional(request.growth)),
        tagline: Set(clean_optional(request.tagline)),
        vision: Set(clean_optional(request.vision)),
        funding: Set(clean_optional(request.funding)),
        revenue: Set(clean_optional(request.revenue)),
        founder_name: Set(clean_optional(request.founder_name)),
        founder_email: Set(clean_optional(request.founder_email)),
        website: Set(clean_optional(request.website)),
        logo_url: Set(clean_optional(request.logo_url)),
        twitter: Set(clean_optional(request.twitter)),
        linkedin: Set(clean_optional(request.linkedin)),
        github: Set(clean_optional(request.github)),
        submitted_by: Set(request.submitted_by),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    };

    let created = state.repositories.startup.create(startup).await?;
    info!("Startup {} '{}' submitted", created.id, created.name);
    Ok(created)
}

/// Applies the fields present in the request; a blank optional field clears it
pub async fn update_startup(
    state: &AppState,
    id: i32,
    request: UpdateStartupRequest,
) -> LaunchpadResult<startups::Model> {
    let category = request.validate().map_err(LaunchpadError::InvalidRequest)?;
    let existing = get_startup(state, id).await?;
    let mut startup = existing.into_active_model();

    if let Some(name) = request.name {
        startup.name = Set(name.trim().to_string());
    }
    if let Some(description) = request.description {
        startup.description = Set(description.trim().to_string());
    }
    if let Some(category) = category {
        startup.category = Set(category.to_string());
    }

    let optional_fields = [
        (&mut startup.stage, request.stage),
        (&mut startup.users, request.users),
        (&mut startup.growth, request.growth),
        (&mut startup.tagline, request.tagline),
        (&mut startup.vision, request.vision),
        (&mut startup.funding, request.funding),
        (&mut startup.revenue, request.revenue),
        (&mut startup.founder_name, request.founder_name),
        (&mut startup.founder_email, request.founder_email),
        (&mut startup.website, request.website),
        (&mut startup.logo_url, request.logo_url),
        (&mut startup.twitter, request.twitter),
        (&mut startup.linkedin, request.linkedin),
        (&mut startup.github, request.github),
    ];
    for (column, value) in optional_fields {
        if value.is_some() {
            *column = Set(clean_optional(value));
        }
    }

    startup.updated_at = Set(Some(Utc::now()));

    let updated = state.repositories.startup.update(startup).await?;
    info!("Startup {} updated", updated.id);
    Ok(updated)
}

pub async fn delete_startup(state: &AppState, id: i32) -> LaunchpadResult<()> {
    let removed = state.repositories.startup.delete(id).await?;
    if removed == 0 {
        return Err(LaunchpadError::NotFound(format!("Startup {} not found", id)));
    }

    info!("Startup {} deleted", id);
    Ok(())
}
