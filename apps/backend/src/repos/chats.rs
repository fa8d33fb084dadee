use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::chat::{Chat, ChatCreate, ChatUpdate, Message, MessageCreate};
use crate::errors::domain::DomainError;

/// Chat and message storage contract.
///
/// Messages belong to exactly one chat, are append-only, and are returned
/// in insertion order.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Chat>, DomainError>;

    /// Lookup by unordered participant pair.
    async fn find_by_participants(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<Chat>, DomainError>;

    async fn create(&self, input: ChatCreate) -> Result<Chat, DomainError>;

    async fn update(&self, id: Uuid, changes: ChatUpdate) -> Result<Chat, DomainError>;

    async fn list_for_account(&self, account_id: Uuid) -> Result<Vec<Chat>, DomainError>;

    async fn create_message(&self, input: MessageCreate) -> Result<Message, DomainError>;

    async fn messages(&self, chat_id: Uuid) -> Result<Vec<Message>, DomainError>;

    /// Flip the read flag on every message addressed to `receiver_id` in
    /// this chat. Returns how many messages changed.
    async fn mark_messages_read(
        &self,
        chat_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<usize, DomainError>;
}
