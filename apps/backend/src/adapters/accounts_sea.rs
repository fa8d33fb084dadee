//! SeaORM adapter for account storage.
//!
//! The relational schema carries one `role` column, not the full role set:
//! writing collapses the set to a single coarse category and reading
//! rebuilds a one-element set from it, with `current_role` recomputed to
//! the same value. An account that held several roles comes back with only
//! the surviving category. This is a deliberate property of the durable
//! schema, not a translation bug; closing it would mean widening the table
//! to store the full set.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::account::{Account, AccountCreate, AccountUpdate};
use crate::entities::accounts;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;
use crate::repos::accounts::AccountStore;

pub const ROLE_PROFESSIONAL: &str = "professional";
pub const ROLE_BUSINESS: &str = "business";

/// Collapse a role set onto the single stored category.
fn collapse_roles(roles: &[String]) -> &'static str {
    if roles.iter().any(|r| r == ROLE_PROFESSIONAL) {
        ROLE_PROFESSIONAL
    } else {
        ROLE_BUSINESS
    }
}

/// Rebuild a domain snapshot from a stored row. The role set is the
/// one-element expansion of the stored category and `current_role` is
/// always that same value.
fn expand(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        google_sub: model.google_sub,
        display_name: model.display_name,
        roles: vec![model.role.clone()],
        current_role: Some(model.role),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// SeaORM implementation of `AccountStore`. Constructed only when a
/// database connection was configured and established.
#[derive(Debug)]
pub struct AccountStoreSea {
    conn: DatabaseConnection,
}

impl AccountStoreSea {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl AccountStore for AccountStoreSea {
    async fn find(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(expand))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(expand))
    }

    async fn create(&self, input: AccountCreate) -> Result<Account, DomainError> {
        let now = time::OffsetDateTime::now_utc();
        let active = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            google_sub: Set(input.google_sub),
            display_name: Set(input.display_name),
            role: Set(collapse_roles(&input.roles).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.conn).await.map_err(map_db_err)?;
        Ok(expand(model))
    }

    async fn update(&self, id: Uuid, changes: AccountUpdate) -> Result<Account, DomainError> {
        let mut active = accounts::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(Some(password_hash));
        }
        if let Some(google_sub) = changes.google_sub {
            active.google_sub = Set(Some(google_sub));
        }
        if let Some(display_name) = changes.display_name {
            active.display_name = Set(Some(display_name));
        }
        if let Some(roles) = changes.roles {
            active.role = Set(collapse_roles(&roles).to_string());
        }
        // changes.current_role is intentionally not applied: the stored
        // category is derived from the role set alone and current_role is
        // recomputed from it on every read.
        active.updated_at = Set(time::OffsetDateTime::now_utc());

        let model = active.update(&self.conn).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) | sea_orm::DbErr::RecordNotUpdated => {
                DomainError::not_found(NotFoundKind::Account, "No such account")
            }
            e => map_db_err(e),
        })?;
        Ok(expand(model))
    }
}
