use tracing::debug;
use uuid::Uuid;

use crate::domain::chat::{Chat, ChatCreate, ChatUpdate, LastMessage, Message, MessageCreate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::chats::ChatStore;

/// Get or create the chat between two accounts. The pair is unordered;
/// opening the same pair twice returns the existing chat.
pub async fn open_chat(chats: &dyn ChatStore, a: Uuid, b: Uuid) -> Result<Chat, DomainError> {
    if a == b {
        return Err(DomainError::validation(
            "A chat needs two distinct participants",
        ));
    }

    if let Some(existing) = chats.find_by_participants(a, b).await? {
        return Ok(existing);
    }

    let chat = chats
        .create(ChatCreate {
            participants: [a, b],
        })
        .await?;
    debug!(chat_id = %chat.id, "chat opened");
    Ok(chat)
}

/// Append a message and do the unread bookkeeping.
///
/// The receiver's unread counter goes up by one on every send; a counter
/// the stored map does not know yet starts from zero rather than being an
/// error. The chat's last-message metadata advances to this message.
pub async fn send_message(
    chats: &dyn ChatStore,
    chat_id: Uuid,
    sender_id: Uuid,
    content: String,
) -> Result<Message, DomainError> {
    let chat = fetch(chats, chat_id).await?;
    let receiver_id = chat
        .peer_of(sender_id)
        .ok_or_else(|| DomainError::validation("Sender is not a participant of this chat"))?;

    let message = chats
        .create_message(MessageCreate {
            chat_id,
            sender_id,
            receiver_id,
            content,
        })
        .await?;

    let mut unread = chat.unread;
    *unread.entry(receiver_id).or_insert(0) += 1;
    chats
        .update(
            chat_id,
            ChatUpdate {
                unread: Some(unread),
                last_message: Some(LastMessage {
                    sender_id,
                    content: message.content.clone(),
                    sent_at: message.created_at,
                }),
            },
        )
        .await?;

    Ok(message)
}

/// Reset one participant's unread counter to zero and flip the read flag
/// on their received messages. The other participant's counter is left
/// untouched.
pub async fn mark_read(
    chats: &dyn ChatStore,
    chat_id: Uuid,
    participant: Uuid,
) -> Result<Chat, DomainError> {
    let chat = fetch(chats, chat_id).await?;
    if chat.peer_of(participant).is_none() {
        return Err(DomainError::validation(
            "Only a participant can mark a chat read",
        ));
    }

    chats.mark_messages_read(chat_id, participant).await?;

    let mut unread = chat.unread;
    unread.insert(participant, 0);
    chats
        .update(
            chat_id,
            ChatUpdate {
                unread: Some(unread),
                last_message: None,
            },
        )
        .await
}

/// Full message history of a chat, in insertion order.
pub async fn history(chats: &dyn ChatStore, chat_id: Uuid) -> Result<Vec<Message>, DomainError> {
    chats.messages(chat_id).await
}

/// All chats an account takes part in, most recently active first.
pub async fn inbox(chats: &dyn ChatStore, account_id: Uuid) -> Result<Vec<Chat>, DomainError> {
    chats.list_for_account(account_id).await
}

async fn fetch(chats: &dyn ChatStore, chat_id: Uuid) -> Result<Chat, DomainError> {
    chats
        .find(chat_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Chat, "No such chat"))
}
