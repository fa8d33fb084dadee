use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::{now, MemStore};
use crate::domain::account::{Account, AccountCreate, AccountUpdate};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::accounts::AccountStore;

#[async_trait]
impl AccountStore for MemStore {
    async fn find(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.get(&id).map(|a| a.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let Some(id) = self.accounts_by_email.get(email).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.accounts.get(&id).map(|a| a.clone()))
    }

    async fn create(&self, input: AccountCreate) -> Result<Account, DomainError> {
        let id = Uuid::new_v4();
        match self.accounts_by_email.entry(input.email.clone()) {
            Entry::Occupied(_) => {
                return Err(DomainError::conflict(
                    ConflictKind::UniqueEmail,
                    "Email already registered",
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let ts = now();
        let account = Account {
            id,
            email: input.email,
            password_hash: input.password_hash,
            google_sub: input.google_sub,
            display_name: input.display_name,
            roles: input.roles,
            current_role: input.current_role,
            created_at: ts,
            updated_at: ts,
        };
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, id: Uuid, changes: AccountUpdate) -> Result<Account, DomainError> {
        let mut entry = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Account, "No such account"))?;

        let account = entry.value_mut();
        if let Some(password_hash) = changes.password_hash {
            account.password_hash = Some(password_hash);
        }
        if let Some(google_sub) = changes.google_sub {
            account.google_sub = Some(google_sub);
        }
        if let Some(display_name) = changes.display_name {
            account.display_name = Some(display_name);
        }
        if let Some(roles) = changes.roles {
            account.roles = roles;
        }
        if let Some(current_role) = changes.current_role {
            account.current_role = current_role;
        }
        account.updated_at = now();
        Ok(account.clone())
    }
}
