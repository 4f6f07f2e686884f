//! Conversation messages exchanged between an owner and the assistant.
//!
//! Messages are created by the [`Stylist`](crate::stylist::Stylist) and never
//! modified afterwards; persistence belongs to a
//! [`ConversationStore`](crate::store::ConversationStore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::compose::Outfit;

/// Who wrote a message.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
  User,
  Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
  pub message_id: Uuid,
  pub owner_id:   Uuid,
  pub role:       Speaker,
  pub content:    String,
  /// Present on assistant replies, even when nothing suitable was found.
  pub outfit:     Option<Outfit>,
  pub sent_at:    DateTime<Utc>,
}

impl ConversationMessage {
  pub fn from_user(owner_id: Uuid, content: impl Into<String>) -> Self {
    Self {
      message_id: Uuid::new_v4(),
      owner_id,
      role: Speaker::User,
      content: content.into(),
      outfit: None,
      sent_at: Utc::now(),
    }
  }

  pub fn from_assistant(
    owner_id: Uuid,
    content: impl Into<String>,
    outfit: Outfit,
  ) -> Self {
    Self {
      message_id: Uuid::new_v4(),
      owner_id,
      role: Speaker::Assistant,
      content: content.into(),
      outfit: Some(outfit),
      sent_at: Utc::now(),
    }
  }
}
