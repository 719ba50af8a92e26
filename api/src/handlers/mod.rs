// Handlers Module
// This module contains the API endpoint handlers

pub mod extract;
pub mod health;
pub mod leaderboard;
pub mod projects;
pub mod startups;
pub mod team;
pub mod users;

pub use health::health_check;
pub use leaderboard::get_leaderboard;
pub use projects::{get_project, get_projects};
pub use startups::{create_startup, delete_startup, get_startup, get_startups, update_startup};
pub use team::{add_team_member, get_team};
pub use users::{create_user, get_dashboard, get_investors, get_user, link_wallet};

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::db::Repositories;

/// Shared state handed to every handler
pub struct ApiState {
    pub repositories: Repositories,
    pub db: Arc<DatabaseConnection>,
}

impl ApiState {
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self {
            repositories: Repositories::new(Arc::clone(&db)),
            db,
        }
    }
}

// Type alias for the application state
pub type AppState = Arc<ApiState>;
