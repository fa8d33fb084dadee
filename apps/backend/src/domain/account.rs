use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Account snapshot.
///
/// `current_role` is always a member of `roles`, or `None` when the set is
/// empty. The role-consistency arithmetic lives in `services::accounts`;
/// stores persist whatever they are handed (the durable adapter collapses
/// the set to a single category, see `adapters::accounts_sea`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    /// Local-auth accounts carry a password hash, provider-auth accounts a
    /// subject id. Exactly one of the two is present.
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
    pub display_name: Option<String>,
    pub roles: Vec<String>,
    pub current_role: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Input for account creation.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub email: String,
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
    pub display_name: Option<String>,
    pub roles: Vec<String>,
    pub current_role: Option<String>,
}

impl AccountCreate {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: None,
            google_sub: None,
            display_name: None,
            roles: Vec::new(),
            current_role: None,
        }
    }

    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    pub fn with_google_sub(mut self, google_sub: impl Into<String>) -> Self {
        self.google_sub = Some(google_sub.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }
}

/// Partial update for an account. `None` leaves a field unchanged.
///
/// `current_role` is doubly optional so it can be cleared: `Some(None)`
/// writes NULL, `None` leaves it alone. The email is identity and never
/// changes after registration.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
    pub display_name: Option<String>,
    pub roles: Option<Vec<String>>,
    pub current_role: Option<Option<String>>,
}
