//! Entity module for database models

pub mod prelude;
pub mod startups;
pub mod team_members;
pub mod users;
