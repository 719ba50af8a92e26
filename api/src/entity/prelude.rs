//! Prelude module for convenient imports

pub use super::startups::Entity as Startups;
pub use super::team_members::Entity as TeamMembers;
pub use super::users::Entity as Users;
