//! Chat session — the in-memory transcript of one conversation.
//!
//! A submission appends the user message, marks the assistant as composing,
//! runs the symptom matcher, appends the templated reply and clears the flag.
//! The two halves are exposed separately (`begin_reply` / `finish_reply`) so a
//! front end can show a typing indicator between them.
//!
//! Guarantees:
//! - message ids are unique and strictly increasing within the session
//! - every user message is directly followed by its assistant reply
//! - a rejected submission leaves the transcript untouched

use chrono::Local;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::matcher::match_symptoms;
use crate::models::enums::ChatRole;
use crate::models::ChatMessage;
use crate::reply::{compose_reply, GREETING};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Assistant is already composing a reply")]
    AlreadyComposing,

    #[error("No user message is waiting for a reply")]
    NothingPending,
}

/// The pair of messages produced by one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    pub session_id: Uuid,
    pub user: ChatMessage,
    pub reply: ChatMessage,
}

/// One conversation. Owned by a single caller; not shared across threads.
pub struct ChatSession<'c> {
    id: Uuid,
    catalog: &'c Catalog,
    messages: Vec<ChatMessage>,
    next_id: u32,
    /// Index into `messages` of the user message awaiting a reply.
    pending: Option<usize>,
}

impl<'c> ChatSession<'c> {
    /// Empty session.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            messages: Vec::new(),
            next_id: 1,
            pending: None,
        }
    }

    /// Session opened by the assistant greeting (id 1).
    pub fn with_greeting(catalog: &'c Catalog) -> Self {
        let mut session = Self::new(catalog);
        session.push(ChatRole::Assistant, GREETING.to_string());
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True between `begin_reply` and `finish_reply`.
    pub fn is_composing(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit a user message and append the assistant reply in one step.
    pub fn submit(&mut self, text: &str) -> Result<Exchange, ChatError> {
        self.begin_reply(text)?;
        self.finish_reply()
    }

    /// Append the user message and mark the assistant as composing.
    pub fn begin_reply(&mut self, text: &str) -> Result<&ChatMessage, ChatError> {
        if self.pending.is_some() {
            return Err(ChatError::AlreadyComposing);
        }
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let idx = self.push(ChatRole::User, text.to_string());
        self.pending = Some(idx);
        tracing::debug!(session = %self.id, message_id = self.messages[idx].id, "User message received");
        Ok(&self.messages[idx])
    }

    /// Match the pending user message, append the reply, clear composing.
    pub fn finish_reply(&mut self) -> Result<Exchange, ChatError> {
        let idx = self.pending.ok_or(ChatError::NothingPending)?;

        let outcome = match_symptoms(self.catalog, &self.messages[idx].content);
        let content = compose_reply(&outcome);
        tracing::info!(
            session = %self.id,
            matched = outcome.ranked.len(),
            top = outcome.top().map(|m| m.condition.name.as_str()),
            confidence = outcome.top().map(|m| m.confidence),
            "Reply composed"
        );

        let reply_idx = self.push(ChatRole::Assistant, content);
        self.pending = None;

        Ok(Exchange {
            session_id: self.id,
            user: self.messages[idx].clone(),
            reply: self.messages[reply_idx].clone(),
        })
    }

    fn push(&mut self, role: ChatRole, content: String) -> usize {
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            sent_at: Local::now().naive_local(),
        });
        self.next_id += 1;
        self.messages.len() - 1
    }
}
