use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use crate::db::DbError;
use crate::entity::startups::{ActiveModel, Column, Entity as Startup, Model};

/// Repository for startup database operations
pub struct StartupRepository {
    conn: Arc<DatabaseConnection>,
}

impl StartupRepository {
    /// Creates a new startup repository
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        StartupRepository { conn }
    }

    fn filtered(category: Option<&str>) -> Select<Startup> {
        let mut query = Startup::find();

        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }

        query
    }

    /// Get a startup by its id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbError> {
        Startup::find_by_id(id)
            .one(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Get every startup, optionally restricted to one category, in insertion (id) order.
    /// The leaderboard relies on this order to break growth ties.
    pub async fn find_all(&self, category: Option<&str>) -> Result<Vec<Model>, DbError> {
        Self::filtered(category)
            .order_by_asc(Column::Id)
            .all(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Get one page of startups, newest first
    pub async fn find_paginated(
        &self,
        category: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Model>, DbError> {
        Self::filtered(category)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Count startups with optional category filtering
    pub async fn count(&self, category: Option<&str>) -> Result<u64, DbError> {
        Self::filtered(category)
            .count(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Insert a new startup and return the stored row
    pub async fn create(&self, startup: ActiveModel) -> Result<Model, DbError> {
        startup.insert(self.conn.as_ref()).await.map_err(Into::into)
    }

    /// Persist changed columns of an existing startup
    pub async fn update(&self, startup: ActiveModel) -> Result<Model, DbError> {
        startup.update(self.conn.as_ref()).await.map_err(Into::into)
    }

    /// Delete a startup, returning the number of removed rows
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = Startup::delete_by_id(id).exec(self.conn.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
