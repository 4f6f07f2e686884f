//! Collaborator traits for wardrobe and conversation storage.
//!
//! Implemented by storage backends (e.g. `closet-store-sqlite`). The
//! [`Stylist`](crate::stylist::Stylist) and the HTTP layer depend on these
//! abstractions, not on any concrete backend.
//!
//! All methods return `Send` futures so implementations can be driven from a
//! multi-threaded runtime.

use std::future::Future;

use uuid::Uuid;

use crate::{
  item::{Cleanliness, NewItem, WardrobeItem},
  message::ConversationMessage,
};

/// Access to the owners' wardrobes.
pub trait WardrobeRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Current snapshot of an owner's items in the order they were added.
  /// Never includes items of other owners.
  fn list_for_owner(
    &self,
    owner_id: Uuid,
  ) -> impl Future<Output = Result<Vec<WardrobeItem>, Self::Error>> + Send + '_;

  /// Register a new item. The store assigns the id and creation time; the
  /// item starts out clean.
  fn add_item(
    &self,
    owner_id: Uuid,
    item: NewItem,
  ) -> impl Future<Output = Result<WardrobeItem, Self::Error>> + Send + '_;

  /// Returns `None` if the item does not exist or belongs to someone else.
  fn get_item(
    &self,
    owner_id: Uuid,
    item_id: Uuid,
  ) -> impl Future<Output = Result<Option<WardrobeItem>, Self::Error>> + Send + '_;

  /// Mark an item clean or dirty. Returns the updated item, or `None` if it
  /// was not found.
  fn set_status(
    &self,
    owner_id: Uuid,
    item_id: Uuid,
    status: Cleanliness,
  ) -> impl Future<Output = Result<Option<WardrobeItem>, Self::Error>> + Send + '_;

  /// Remove an item. Returns `false` if there was nothing to remove.
  fn remove_item(
    &self,
    owner_id: Uuid,
    item_id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

/// Append-only record of conversations.
pub trait ConversationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Durably record one message.
  fn append(
    &self,
    message: ConversationMessage,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// An owner's messages ordered by `sent_at`, ties in insertion order.
  fn stream_for_owner(
    &self,
    owner_id: Uuid,
  ) -> impl Future<Output = Result<Vec<ConversationMessage>, Self::Error>> + Send + '_;
}
