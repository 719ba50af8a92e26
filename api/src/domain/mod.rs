//! Pure display-layer logic shared by the handlers: startup ranking and the
//! startup-to-project view-model adapter. Nothing here touches the database or fails.

pub mod classification;
pub mod project;
pub mod ranking;

pub use classification::{ActivityLevel, ProjectStage, Sector};
pub use project::{to_project, to_project_at, Project};
pub use ranking::{compute_leaderboard, parse_growth, LeaderboardEntry};
