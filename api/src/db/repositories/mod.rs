// Database repository management

mod startup_repository;
mod team_member_repository;
mod user_repository;

pub use startup_repository::StartupRepository;
pub use team_member_repository::TeamMemberRepository;
pub use user_repository::UserRepository;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Container for all database repositories
pub struct Repositories {
    pub startup: StartupRepository,
    pub team_member: TeamMemberRepository,
    pub user: UserRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Repositories {
            startup: StartupRepository::new(Arc::clone(&conn)),
            team_member: TeamMemberRepository::new(Arc::clone(&conn)),
            user: UserRepository::new(conn),
        }
    }
}
