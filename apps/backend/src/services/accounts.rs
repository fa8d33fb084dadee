use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::account::{Account, AccountCreate, AccountUpdate};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::repos::accounts::AccountStore;

/// Profile fields a holder may edit after registration. Roles are managed
/// through the dedicated role operations below.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
}

/// Register a new account.
///
/// Exactly one authentication method is accepted: a local password hash or
/// an external provider subject. When no current role is supplied the
/// first role of the set becomes current, keeping the membership invariant
/// from the start.
pub async fn register(
    store: &dyn AccountStore,
    mut input: AccountCreate,
) -> Result<Account, DomainError> {
    match (&input.password_hash, &input.google_sub) {
        (None, None) => {
            return Err(DomainError::validation(
                "Registration needs a password hash or a provider subject",
            ));
        }
        (Some(_), Some(_)) => {
            return Err(DomainError::validation(
                "Registration takes a password hash or a provider subject, not both",
            ));
        }
        _ => {}
    }
    if input.email.trim().is_empty() {
        return Err(DomainError::validation("Email must not be empty"));
    }

    if store.find_by_email(&input.email).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::UniqueEmail,
            "Email already registered",
        ));
    }

    match &input.current_role {
        Some(role) if !input.roles.contains(role) => {
            return Err(DomainError::validation(
                "Current role must be a member of the role set",
            ));
        }
        None => input.current_role = input.roles.first().cloned(),
        _ => {}
    }

    let account = store.create(input).await?;
    info!(
        account_id = %account.id,
        email = %Redacted(&account.email),
        "account registered"
    );
    Ok(account)
}

/// Add a role to an account's set. Adding a role the account already holds
/// is a no-op. A previously empty set makes the new role current.
pub async fn add_role(
    store: &dyn AccountStore,
    id: Uuid,
    role: &str,
) -> Result<Account, DomainError> {
    let account = fetch(store, id).await?;
    if account.roles.iter().any(|r| r == role) {
        debug!(account_id = %id, role, "role already present");
        return Ok(account);
    }

    let mut roles = account.roles;
    roles.push(role.to_string());
    let current_role = account.current_role.or_else(|| Some(role.to_string()));

    store
        .update(
            id,
            AccountUpdate {
                roles: Some(roles),
                current_role: Some(current_role),
                ..AccountUpdate::default()
            },
        )
        .await
}

/// Remove a role from an account's set. When the removed role was current,
/// the first remaining role takes over, or the current role clears if the
/// set is now empty.
pub async fn remove_role(
    store: &dyn AccountStore,
    id: Uuid,
    role: &str,
) -> Result<Account, DomainError> {
    let account = fetch(store, id).await?;
    if !account.roles.iter().any(|r| r == role) {
        debug!(account_id = %id, role, "role not present, nothing to remove");
        return Ok(account);
    }

    let roles: Vec<String> = account
        .roles
        .into_iter()
        .filter(|r| r != role)
        .collect();
    let current_role = match account.current_role {
        Some(current) if current == role => roles.first().cloned(),
        other => other,
    };

    store
        .update(
            id,
            AccountUpdate {
                roles: Some(roles),
                current_role: Some(current_role),
                ..AccountUpdate::default()
            },
        )
        .await
}

/// Switch the current role to another member of the role set.
pub async fn switch_role(
    store: &dyn AccountStore,
    id: Uuid,
    role: &str,
) -> Result<Account, DomainError> {
    let account = fetch(store, id).await?;
    if !account.roles.iter().any(|r| r == role) {
        return Err(DomainError::validation(
            "Cannot switch to a role the account does not hold",
        ));
    }

    store
        .update(
            id,
            AccountUpdate {
                current_role: Some(Some(role.to_string())),
                ..AccountUpdate::default()
            },
        )
        .await
}

/// Apply profile edits. Role bookkeeping is untouched by this path.
pub async fn update_profile(
    store: &dyn AccountStore,
    id: Uuid,
    edit: ProfileEdit,
) -> Result<Account, DomainError> {
    store
        .update(
            id,
            AccountUpdate {
                display_name: edit.display_name,
                password_hash: edit.password_hash,
                google_sub: edit.google_sub,
                ..AccountUpdate::default()
            },
        )
        .await
}

async fn fetch(store: &dyn AccountStore, id: Uuid) -> Result<Account, DomainError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Account, "No such account"))
}
