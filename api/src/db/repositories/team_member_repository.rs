use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::db::DbError;
use crate::entity::{prelude::TeamMembers, team_members};

/// Repository for managing startup team members in the database
pub struct TeamMemberRepository {
    conn: Arc<DatabaseConnection>,
}

impl TeamMemberRepository {
    /// Creates a new team member repository with the given database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    /// Lists the members of one startup in the order they were added
    pub async fn find_by_startup(
        &self,
        startup_id: i32,
    ) -> Result<Vec<team_members::Model>, DbError> {
        TeamMembers::find()
            .filter(team_members::Column::StartupId.eq(startup_id))
            .order_by_asc(team_members::Column::Id)
            .all(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Adds a member to a startup's team
    pub async fn create(
        &self,
        member: team_members::ActiveModel,
    ) -> Result<team_members::Model, DbError> {
        member.insert(self.conn.as_ref()).await.map_err(Into::into)
    }
}
