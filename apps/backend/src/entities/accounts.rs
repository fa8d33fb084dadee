use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The one durably persisted table. The `role` column holds a single
/// coarse category (`professional` | `business`); the full role set of the
/// domain model does not survive a round-trip through this schema. See
/// `adapters::accounts_sea` for the mapping.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    #[sea_orm(column_name = "password_hash")]
    pub password_hash: Option<String>,
    #[sea_orm(column_name = "google_sub")]
    pub google_sub: Option<String>,
    #[sea_orm(column_name = "display_name")]
    pub display_name: Option<String>,
    pub role: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
