//! SeaORM -> DomainError translation.
//!
//! The durable adapter converts `sea_orm::DbErr` into `DomainError` here;
//! higher layers never see a raw database error.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn is_unique_violation(msg: &str) -> bool {
    msg.contains("23505") || msg.contains("unique") || msg.contains("duplicate")
}

/// Map a unique-constraint message to the conflicting domain key.
fn map_constraint_to_conflict(msg: &str) -> Option<(ConflictKind, &'static str)> {
    if msg.contains("accounts_email_key") || msg.contains("accounts.email") {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
            warn!(error = %msg, "database connection failure");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ if is_unique_violation(&msg) => match map_constraint_to_conflict(&msg) {
            Some((kind, detail)) => DomainError::conflict(kind, detail),
            None => DomainError::conflict(
                ConflictKind::Other("UniqueViolation".into()),
                "Unique constraint violated",
            ),
        },
        _ => {
            warn!(error = %msg, "unexpected database error");
            DomainError::infra(InfraErrorKind::Other("Database error".into()), msg)
        }
    }
}
