use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, maybe_db_url, DbOwner, DbProfile};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Connect to the configured database. Fails fast with the
/// backend-unavailable signal when the connection attempt fails; does NOT
/// run migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    connect(&database_url).await
}

/// Connect and bring the schema up to date. Single entrypoint used by
/// state assembly. Returns `Ok(None)` when no database is configured in
/// the environment: the caller then runs transient-only.
pub async fn maybe_bootstrap_db(
    profile: DbProfile,
) -> Result<Option<DatabaseConnection>, AppError> {
    let Some(database_url) = maybe_db_url(profile)? else {
        info!("no database configured, storage runs transient-only");
        return Ok(None);
    };

    let conn = connect(&database_url).await?;
    migration::Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::from(crate::infra::db_errors::map_db_err(e)))?;
    info!("database connected and migrated");
    Ok(Some(conn))
}

async fn connect(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(database_url).await.map_err(|e| {
        AppError::from(DomainError::infra(
            InfraErrorKind::DbUnavailable,
            format!("Failed to connect to database: {e}"),
        ))
    })?;
    Ok(conn)
}
