//! Transient in-process adapter.
//!
//! `MemStore` keeps every entity in a keyed collection and generates opaque
//! ids on creation. It is the default store when no database is configured
//! and the fallback target when the durable backend degrades, so it
//! implements every contract at full fidelity: complete role set and
//! current role, job applicant lists, chat unread maps and message order.
//!
//! All methods are async to match the contract even though no real I/O
//! happens here. The maps guard individual calls only; read-modify-write
//! sequences in the service layer run unlocked (see `services`).

mod accounts;
mod applications;
mod chats;
mod jobs;
mod posts;

use dashmap::DashMap;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::application::Application;
use crate::domain::chat::{Chat, Message};
use crate::domain::job::Job;
use crate::domain::post::Post;

#[derive(Debug, Default)]
pub struct MemStore {
    pub(crate) accounts: DashMap<Uuid, Account>,
    pub(crate) accounts_by_email: DashMap<String, Uuid>,
    pub(crate) jobs: DashMap<Uuid, Job>,
    pub(crate) applications: DashMap<Uuid, Application>,
    pub(crate) chats: DashMap<Uuid, Chat>,
    /// Messages keyed by chat id; vector order is insertion order.
    pub(crate) messages: DashMap<Uuid, Vec<Message>>,
    pub(crate) posts: DashMap<Uuid, Post>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
