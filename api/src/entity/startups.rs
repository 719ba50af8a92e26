//! SeaORM Entity for the startups table
//!
//! The schema is deliberately loose: apart from name, description and category every
//! column may be null, and display fields such as `growth` or `users` are free text.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "startups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String, // Web2 | Web3, validated by the API on write
    pub stage: Option<String>,
    pub users: Option<String>,
    pub growth: Option<String>, // e.g. "+245%"
    pub tagline: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub vision: Option<String>,
    pub funding: Option<String>,
    pub revenue: Option<String>,
    pub founder_name: Option<String>,
    pub founder_email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub submitted_by: Option<Uuid>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
