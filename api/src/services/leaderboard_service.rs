// Leaderboard business logic: every ranked view goes through domain::ranking

use crate::domain::{compute_leaderboard, LeaderboardEntry};
use crate::error::{LaunchpadError, LaunchpadResult};
use crate::handlers::AppState;
use crate::models::{parse_category_filter, Category, LeaderboardQuery, LeaderboardResponse};

/// Ranks all startups (optionally one category) by growth
pub async fn ranked_startups(
    state: &AppState,
    category: Option<Category>,
) -> LaunchpadResult<Vec<LeaderboardEntry>> {
    let records = state
        .repositories
        .startup
        .find_all(category.as_ref().map(|c| c.as_str()))
        .await?;

    Ok(compute_leaderboard(records))
}

pub async fn get_leaderboard(
    state: &AppState,
    query: &LeaderboardQuery,
) -> LaunchpadResult<LeaderboardResponse> {
    let category = parse_category_filter(query.category.as_deref())
        .map_err(LaunchpadError::InvalidRequest)?;

    let mut leaderboard = ranked_startups(state, category).await?;
    let total = leaderboard.len();

    if let Some(limit) = query.limit {
        leaderboard.truncate(limit);
    }

    Ok(LeaderboardResponse { total, leaderboard })
}
