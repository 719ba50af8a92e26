use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::DbError;
use crate::entity::{prelude::Users, users};

/// Repository for builder and investor accounts
pub struct UserRepository {
    conn: Arc<DatabaseConnection>,
}

impl UserRepository {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbError> {
        Users::find_by_id(id)
            .one(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Emails are stored lower-cased, so callers pass the normalized form
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbError> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .one(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// All users with the given role, oldest account first
    pub async fn find_by_role(&self, role: &str) -> Result<Vec<users::Model>, DbError> {
        Users::find()
            .filter(users::Column::Role.eq(role))
            .order_by_asc(users::Column::CreatedAt)
            .all(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    pub async fn create(&self, user: users::ActiveModel) -> Result<users::Model, DbError> {
        user.insert(self.conn.as_ref()).await.map_err(Into::into)
    }

    pub async fn update(&self, user: users::ActiveModel) -> Result<users::Model, DbError> {
        user.update(self.conn.as_ref()).await.map_err(Into::into)
    }
}
