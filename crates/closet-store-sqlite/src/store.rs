//! [`SqliteStore`]: the SQLite implementation of [`WardrobeRepository`] and
//! [`ConversationStore`].

use std::path::Path;

use chrono::Utc;
use closet_core::{
  item::{Cleanliness, NewItem, WardrobeItem},
  message::ConversationMessage,
  store::{ConversationStore, WardrobeRepository},
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Result,
  encode::{
    ITEM_COLUMNS, MESSAGE_COLUMNS, RawItem, RawMessage, encode_dt,
    encode_formality, encode_outfit, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Wardrobes and conversations backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── WardrobeRepository impl ─────────────────────────────────────────────────

impl WardrobeRepository for SqliteStore {
  type Error = crate::Error;

  async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<WardrobeItem>> {
    let owner_str = encode_uuid(owner_id);

    let raws: Vec<RawItem> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {ITEM_COLUMNS} FROM items
           WHERE owner_id = ?1
           ORDER BY created_at, rowid"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![owner_str], RawItem::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawItem::into_item).collect()
  }

  async fn add_item(&self, owner_id: Uuid, input: NewItem) -> Result<WardrobeItem> {
    let item = WardrobeItem {
      item_id:    Uuid::new_v4(),
      owner_id,
      name:       input.name,
      category:   input.category,
      color:      input.color,
      formality:  input.formality,
      status:     Cleanliness::Clean,
      image_ref:  input.image_ref,
      created_at: Utc::now(),
    };

    let item_id_str   = encode_uuid(item.item_id);
    let owner_str     = encode_uuid(owner_id);
    let name          = item.name.clone();
    let category_str  = item.category.as_ref().to_owned();
    let color         = item.color.clone();
    let formality_str = encode_formality(&item.formality)?;
    let status_str    = item.status.as_ref().to_owned();
    let image_ref     = item.image_ref.clone();
    let created_str   = encode_dt(item.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (
             item_id, owner_id, name, category, color,
             formality, status, image_ref, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            item_id_str,
            owner_str,
            name,
            category_str,
            color,
            formality_str,
            status_str,
            image_ref,
            created_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(item_id = %item.item_id, %owner_id, "added wardrobe item");
    Ok(item)
  }

  async fn get_item(&self, owner_id: Uuid, item_id: Uuid) -> Result<Option<WardrobeItem>> {
    let owner_str = encode_uuid(owner_id);
    let item_str  = encode_uuid(item_id);

    let raw: Option<RawItem> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {ITEM_COLUMNS} FROM items
                 WHERE item_id = ?1 AND owner_id = ?2"
              ),
              rusqlite::params![item_str, owner_str],
              RawItem::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawItem::into_item).transpose()
  }

  async fn set_status(
    &self,
    owner_id: Uuid,
    item_id:  Uuid,
    status:   Cleanliness,
  ) -> Result<Option<WardrobeItem>> {
    let owner_str  = encode_uuid(owner_id);
    let item_str   = encode_uuid(item_id);
    let status_str = status.as_ref().to_owned();

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE items SET status = ?1 WHERE item_id = ?2 AND owner_id = ?3",
          rusqlite::params![status_str, item_str, owner_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }
    self.get_item(owner_id, item_id).await
  }

  async fn remove_item(&self, owner_id: Uuid, item_id: Uuid) -> Result<bool> {
    let owner_str = encode_uuid(owner_id);
    let item_str  = encode_uuid(item_id);

    let removed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM items WHERE item_id = ?1 AND owner_id = ?2",
          rusqlite::params![item_str, owner_str],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }
}

// ─── ConversationStore impl ──────────────────────────────────────────────────

impl ConversationStore for SqliteStore {
  type Error = crate::Error;

  async fn append(&self, message: ConversationMessage) -> Result<()> {
    let message_str = encode_uuid(message.message_id);
    let owner_str   = encode_uuid(message.owner_id);
    let role_str    = message.role.as_ref().to_owned();
    let outfit_str  = encode_outfit(message.outfit.as_ref())?;
    let sent_str    = encode_dt(message.sent_at);
    let content     = message.content;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO messages (message_id, owner_id, role, content, outfit, sent_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![message_str, owner_str, role_str, content, outfit_str, sent_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn stream_for_owner(&self, owner_id: Uuid) -> Result<Vec<ConversationMessage>> {
    let owner_str = encode_uuid(owner_id);

    let raws: Vec<RawMessage> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {MESSAGE_COLUMNS} FROM messages
           WHERE owner_id = ?1
           ORDER BY sent_at, seq"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![owner_str], RawMessage::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMessage::into_message).collect()
  }
}
