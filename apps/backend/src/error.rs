use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Boundary error for callers outside the storage core (the routing layer
/// consumes this). Carries a stable machine-readable code per variant.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        AppError::Config {
            detail: detail.into(),
        }
    }

    /// Stable error code for logs and API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Domain(DomainError::Validation(_)) => "VALIDATION",
            AppError::Domain(DomainError::Conflict(_, _)) => "CONFLICT",
            AppError::Domain(DomainError::NotFound(_, _)) => "NOT_FOUND",
            AppError::Domain(DomainError::Infra(InfraErrorKind::DbUnavailable, _)) => {
                "DB_UNAVAILABLE"
            }
            AppError::Domain(DomainError::Infra(_, _)) => "INTERNAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::NotFoundKind;

    #[test]
    fn domain_errors_keep_their_code() {
        let err = AppError::from(DomainError::not_found(NotFoundKind::Account, "gone"));
        assert_eq!(err.code(), "NOT_FOUND");

        let err = AppError::from(DomainError::infra(
            InfraErrorKind::DbUnavailable,
            "no connection",
        ));
        assert_eq!(err.code(), "DB_UNAVAILABLE");
    }

    #[test]
    fn config_errors_have_their_own_code() {
        assert_eq!(AppError::config("missing var").code(), "CONFIG_ERROR");
    }
}
