mod common;

use std::sync::Arc;

use async_trait::async_trait;
use backend::adapters::mem::MemStore;
use backend::domain::account::{Account, AccountCreate, AccountUpdate};
use backend::domain::job::JobCreate;
use backend::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use backend::infra::state::build_state;
use backend::repos::accounts::AccountStore;
use backend::services::{accounts, jobs};
use backend::store::failover::FailoverStore;
use common::unique_email;
use uuid::Uuid;

/// Durable adapter stand-in whose connection is permanently gone.
#[derive(Debug, Default)]
struct DownAccountStore;

impl DownAccountStore {
    fn refused<T>() -> Result<T, DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::DbUnavailable,
            "connection refused",
        ))
    }
}

#[async_trait]
impl AccountStore for DownAccountStore {
    async fn find(&self, _id: Uuid) -> Result<Option<Account>, DomainError> {
        Self::refused()
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, DomainError> {
        Self::refused()
    }

    async fn create(&self, _input: AccountCreate) -> Result<Account, DomainError> {
        Self::refused()
    }

    async fn update(
        &self,
        _id: Uuid,
        _changes: AccountUpdate,
    ) -> Result<Account, DomainError> {
        Self::refused()
    }
}

fn degraded_store() -> FailoverStore {
    FailoverStore::new(Arc::new(MemStore::new()), Some(Arc::new(DownAccountStore)))
}

/// Scenario: the durable backend always fails; account creation still
/// returns a valid snapshot served from the transient store and the
/// failure stays out of the caller's way.
#[tokio::test]
async fn account_create_survives_durable_outage() {
    let store = degraded_store();

    let account = accounts::register(
        &store,
        AccountCreate::new(unique_email("degraded"))
            .with_password_hash("argon2$fake")
            .with_roles(vec!["professional".into(), "hub".into()]),
    )
    .await
    .unwrap();

    // The transient store keeps full fidelity: both roles survive, which
    // the durable adapter's single-category schema would not preserve.
    assert_eq!(account.roles, vec!["professional", "hub"]);

    let reloaded = store.find(account.id).await.unwrap().unwrap();
    assert_eq!(reloaded, account);
}

/// Test: role bookkeeping keeps working across the fallback path
#[tokio::test]
async fn role_operations_survive_durable_outage() {
    let store = degraded_store();
    let account = accounts::register(
        &store,
        AccountCreate::new(unique_email("degraded-roles")).with_password_hash("argon2$fake"),
    )
    .await
    .unwrap();

    let account = accounts::add_role(&store, account.id, "hub").await.unwrap();
    assert_eq!(account.current_role.as_deref(), Some("hub"));
}

/// Test: when the transient call fails too, that error surfaces unchanged
#[tokio::test]
async fn transient_errors_propagate_after_fallback() {
    let store = degraded_store();

    let err = store
        .update(Uuid::new_v4(), AccountUpdate::default())
        .await
        .unwrap_err();
    // Not DbUnavailable: the durable failure was swallowed, the transient
    // NotFound is the caller's answer.
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::Account, _)
    ));
}

/// Test: non-account entities never touch the durable adapter, so a dead
/// backend does not slow them down or fail them
#[tokio::test]
async fn jobs_bypass_the_durable_backend() {
    let store = degraded_store();

    let job = jobs::post_job(
        &store,
        JobCreate {
            hub_id: Uuid::new_v4(),
            title: "Bartender".into(),
            description: "Friday".into(),
            location: "Berlin".into(),
        },
    )
    .await
    .unwrap();

    let application = jobs::apply_to_job(&store, &store, job.id, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(application.job_id, job.id);
}

/// Test: availability flag reflects configuration
#[tokio::test]
async fn durable_availability_flag() {
    assert!(degraded_store().durable_available());
    assert!(!FailoverStore::transient_only(Arc::new(MemStore::new())).durable_available());
}

/// Test: the state builder accepts an injected adapter, so the whole
/// degraded path is reachable without environment configuration
#[tokio::test]
async fn state_builder_accepts_injected_durable_adapter() {
    let state = build_state()
        .with_durable(Arc::new(DownAccountStore))
        .build()
        .await
        .unwrap();
    assert!(state.store().durable_available());

    let account = accounts::register(
        state.accounts(),
        AccountCreate::new(unique_email("injected")).with_password_hash("argon2$fake"),
    )
    .await
    .unwrap();
    assert!(state
        .accounts()
        .find(account.id)
        .await
        .unwrap()
        .is_some());
}
