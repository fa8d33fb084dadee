use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::{now, MemStore};
use crate::domain::chat::{Chat, ChatCreate, ChatUpdate, Message, MessageCreate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::chats::ChatStore;

#[async_trait]
impl ChatStore for MemStore {
    async fn find(&self, id: Uuid) -> Result<Option<Chat>, DomainError> {
        Ok(self.chats.get(&id).map(|c| c.clone()))
    }

    async fn find_by_participants(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<Chat>, DomainError> {
        Ok(self
            .chats
            .iter()
            .find(|c| {
                let [x, y] = c.participants;
                (x == a && y == b) || (x == b && y == a)
            })
            .map(|c| c.clone()))
    }

    async fn create(&self, input: ChatCreate) -> Result<Chat, DomainError> {
        let ts = now();
        let [a, b] = input.participants;
        let chat = Chat {
            id: Uuid::new_v4(),
            participants: input.participants,
            unread: HashMap::from([(a, 0), (b, 0)]),
            last_message: None,
            created_at: ts,
            updated_at: ts,
        };
        self.chats.insert(chat.id, chat.clone());
        self.messages.insert(chat.id, Vec::new());
        Ok(chat)
    }

    async fn update(&self, id: Uuid, changes: ChatUpdate) -> Result<Chat, DomainError> {
        let mut entry = self
            .chats
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Chat, "No such chat"))?;

        let chat = entry.value_mut();
        if let Some(unread) = changes.unread {
            chat.unread = unread;
        }
        if let Some(last_message) = changes.last_message {
            chat.last_message = Some(last_message);
        }
        chat.updated_at = now();
        Ok(chat.clone())
    }

    async fn list_for_account(&self, account_id: Uuid) -> Result<Vec<Chat>, DomainError> {
        let mut chats: Vec<Chat> = self
            .chats
            .iter()
            .filter(|c| c.participants.contains(&account_id))
            .map(|c| c.clone())
            .collect();
        chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(chats)
    }

    async fn create_message(&self, input: MessageCreate) -> Result<Message, DomainError> {
        if !self.chats.contains_key(&input.chat_id) {
            return Err(DomainError::not_found(NotFoundKind::Chat, "No such chat"));
        }

        let message = Message {
            id: Uuid::new_v4(),
            chat_id: input.chat_id,
            sender_id: input.sender_id,
            receiver_id: input.receiver_id,
            content: input.content,
            read: false,
            created_at: now(),
        };
        self.messages
            .entry(input.chat_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn messages(&self, chat_id: Uuid) -> Result<Vec<Message>, DomainError> {
        self.messages
            .get(&chat_id)
            .map(|m| m.clone())
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Chat, "No such chat"))
    }

    async fn mark_messages_read(
        &self,
        chat_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<usize, DomainError> {
        let mut entry = self
            .messages
            .get_mut(&chat_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Chat, "No such chat"))?;

        let mut flipped = 0;
        for message in entry.value_mut() {
            if message.receiver_id == receiver_id && !message.read {
                message.read = true;
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}
