//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings so that lexical order
//! matches chronological order. Enum columns hold their snake_case labels;
//! formality sets and outfits are stored as compact JSON. UUIDs are stored as
//! hyphenated lowercase strings.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use closet_core::{
  compose::Outfit,
  item::{FormalityFit, WardrobeItem},
  message::ConversationMessage,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Parse an enum column written with the type's `AsRef<str>` label.
pub fn decode_label<T: FromStr>(kind: &'static str, s: &str) -> Result<T> {
  s.parse().map_err(|_| Error::UnknownLabel {
    kind,
    label: s.to_owned(),
  })
}

// ─── JSON columns ────────────────────────────────────────────────────────────

pub fn encode_formality(fit: &FormalityFit) -> Result<String> {
  Ok(serde_json::to_string(fit)?)
}

pub fn decode_formality(s: &str) -> Result<FormalityFit> {
  Ok(serde_json::from_str(s)?)
}

pub fn encode_outfit(outfit: Option<&Outfit>) -> Result<Option<String>> {
  outfit
    .map(serde_json::to_string)
    .transpose()
    .map_err(Error::from)
}

pub fn decode_outfit(s: Option<&str>) -> Result<Option<Outfit>> {
  s.map(serde_json::from_str).transpose().map_err(Error::from)
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// Column order shared by every `SELECT` over `items`.
pub const ITEM_COLUMNS: &str = "item_id, owner_id, name, category, color, \
                                formality, status, image_ref, created_at";

/// A row from `items`, before decoding.
pub struct RawItem {
  pub item_id:    String,
  pub owner_id:   String,
  pub name:       String,
  pub category:   String,
  pub color:      String,
  pub formality:  String,
  pub status:     String,
  pub image_ref:  Option<String>,
  pub created_at: String,
}

impl RawItem {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      item_id:    row.get(0)?,
      owner_id:   row.get(1)?,
      name:       row.get(2)?,
      category:   row.get(3)?,
      color:      row.get(4)?,
      formality:  row.get(5)?,
      status:     row.get(6)?,
      image_ref:  row.get(7)?,
      created_at: row.get(8)?,
    })
  }

  pub fn into_item(self) -> Result<WardrobeItem> {
    Ok(WardrobeItem {
      item_id:    decode_uuid(&self.item_id)?,
      owner_id:   decode_uuid(&self.owner_id)?,
      name:       self.name,
      category:   decode_label("category", &self.category)?,
      color:      self.color,
      formality:  decode_formality(&self.formality)?,
      status:     decode_label("status", &self.status)?,
      image_ref:  self.image_ref,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Column order shared by every `SELECT` over `messages`.
pub const MESSAGE_COLUMNS: &str =
  "message_id, owner_id, role, content, outfit, sent_at";

/// A row from `messages`, before decoding.
pub struct RawMessage {
  pub message_id: String,
  pub owner_id:   String,
  pub role:       String,
  pub content:    String,
  pub outfit:     Option<String>,
  pub sent_at:    String,
}

impl RawMessage {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      message_id: row.get(0)?,
      owner_id:   row.get(1)?,
      role:       row.get(2)?,
      content:    row.get(3)?,
      outfit:     row.get(4)?,
      sent_at:    row.get(5)?,
    })
  }

  pub fn into_message(self) -> Result<ConversationMessage> {
    Ok(ConversationMessage {
      message_id: decode_uuid(&self.message_id)?,
      owner_id:   decode_uuid(&self.owner_id)?,
      role:       decode_label("role", &self.role)?,
      content:    self.content,
      outfit:     decode_outfit(self.outfit.as_deref())?,
      sent_at:    decode_dt(&self.sent_at)?,
    })
  }
}
