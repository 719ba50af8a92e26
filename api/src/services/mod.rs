// Business logic service implementations

pub mod health;
pub mod leaderboard_service;
pub mod project_service;
pub mod startup_service;
pub mod team_service;
pub mod user_service;
