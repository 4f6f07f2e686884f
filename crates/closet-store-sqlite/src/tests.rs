//! Integration tests for `SqliteStore` against an in-memory database.

use closet_core::{
  compose::Outfit,
  item::{Cleanliness, Formality, FormalityFit, GarmentCategory, NewItem},
  message::{ConversationMessage, Speaker},
  store::{ConversationStore, WardrobeRepository},
  stylist::Stylist,
  respond::FixedPhrase,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_item(name: &str, category: GarmentCategory, formality: FormalityFit) -> NewItem {
  NewItem {
    name: name.into(),
    category,
    color: "black".into(),
    formality,
    image_ref: None,
  }
}

// ─── Wardrobe ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_item() {
  let s = store().await;
  let owner = Uuid::new_v4();

  let added = s
    .add_item(owner, new_item("blazer", GarmentCategory::Blazer, Formality::Formal.into()))
    .await
    .unwrap();
  assert_eq!(added.owner_id, owner);
  assert_eq!(added.status, Cleanliness::Clean);

  let fetched = s.get_item(owner, added.item_id).await.unwrap().unwrap();
  assert_eq!(fetched, added);
}

#[tokio::test]
async fn get_item_of_another_owner_returns_none() {
  let s = store().await;
  let owner = Uuid::new_v4();
  let added = s
    .add_item(owner, new_item("skirt", GarmentCategory::Skirt, Formality::Casual.into()))
    .await
    .unwrap();

  assert!(s.get_item(Uuid::new_v4(), added.item_id).await.unwrap().is_none());
  assert!(s.get_item(owner, Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_is_per_owner_and_in_insertion_order() {
  let s = store().await;
  let alice = Uuid::new_v4();
  let bob = Uuid::new_v4();

  for name in ["first", "second", "third"] {
    s.add_item(alice, new_item(name, GarmentCategory::Shirt, Formality::Casual.into()))
      .await
      .unwrap();
  }
  s.add_item(bob, new_item("bob's", GarmentCategory::Pants, Formality::Casual.into()))
    .await
    .unwrap();

  let items = s.list_for_owner(alice).await.unwrap();
  let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
  assert_eq!(names, ["first", "second", "third"]);
  assert!(items.iter().all(|i| i.owner_id == alice));

  assert!(s.list_for_owner(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn multi_formality_roundtrip() {
  let s = store().await;
  let owner = Uuid::new_v4();
  let fit = FormalityFit::many([Formality::SmartCasual, Formality::Casual]).unwrap();

  s.add_item(owner, new_item("chinos", GarmentCategory::Pants, fit.clone()))
    .await
    .unwrap();

  let items = s.list_for_owner(owner).await.unwrap();
  assert_eq!(items[0].formality, fit);
}

#[tokio::test]
async fn set_status_marks_dirty_and_clean() {
  let s = store().await;
  let owner = Uuid::new_v4();
  let added = s
    .add_item(owner, new_item("tee", GarmentCategory::Shirt, Formality::Informal.into()))
    .await
    .unwrap();

  let dirty = s
    .set_status(owner, added.item_id, Cleanliness::Dirty)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(dirty.status, Cleanliness::Dirty);

  let clean = s
    .set_status(owner, added.item_id, Cleanliness::Clean)
    .await
    .unwrap()
    .unwrap();
  assert!(clean.is_clean());
}

#[tokio::test]
async fn set_status_missing_returns_none() {
  let s = store().await;
  let result = s
    .set_status(Uuid::new_v4(), Uuid::new_v4(), Cleanliness::Dirty)
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn remove_item_once() {
  let s = store().await;
  let owner = Uuid::new_v4();
  let added = s
    .add_item(owner, new_item("coat", GarmentCategory::Coat, Formality::Casual.into()))
    .await
    .unwrap();

  assert!(!s.remove_item(Uuid::new_v4(), added.item_id).await.unwrap());
  assert!(s.remove_item(owner, added.item_id).await.unwrap());
  assert!(!s.remove_item(owner, added.item_id).await.unwrap());
  assert!(s.list_for_owner(owner).await.unwrap().is_empty());
}

// ─── Conversations ───────────────────────────────────────────────────────────

#[tokio::test]
async fn append_and_stream_in_order() {
  let s = store().await;
  let owner = Uuid::new_v4();

  let question = ConversationMessage::from_user(owner, "jantar hoje");
  let answer = ConversationMessage::from_assistant(owner, "Ótima escolha!", Outfit::default());
  s.append(question.clone()).await.unwrap();
  s.append(answer.clone()).await.unwrap();
  s.append(ConversationMessage::from_user(Uuid::new_v4(), "someone else"))
    .await
    .unwrap();

  let history = s.stream_for_owner(owner).await.unwrap();
  assert_eq!(history, vec![question, answer]);
}

#[tokio::test]
async fn equal_timestamps_keep_insertion_order() {
  let s = store().await;
  let owner = Uuid::new_v4();

  let first = ConversationMessage::from_user(owner, "one");
  let mut second = ConversationMessage::from_user(owner, "two");
  second.sent_at = first.sent_at;
  s.append(first).await.unwrap();
  s.append(second).await.unwrap();

  let contents: Vec<_> = s
    .stream_for_owner(owner)
    .await
    .unwrap()
    .into_iter()
    .map(|m| m.content)
    .collect();
  assert_eq!(contents, ["one", "two"]);
}

#[tokio::test]
async fn duplicate_message_id_is_rejected() {
  let s = store().await;
  let message = ConversationMessage::from_user(Uuid::new_v4(), "hello");
  s.append(message.clone()).await.unwrap();
  assert!(s.append(message).await.is_err());
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn stylist_over_sqlite() {
  let s = Arc::new(store().await);
  let owner = Uuid::new_v4();

  s.add_item(owner, new_item("gown", GarmentCategory::Dress, Formality::Formal.into()))
    .await
    .unwrap();
  s.add_item(owner, new_item("heels", GarmentCategory::Shoe, Formality::Formal.into()))
    .await
    .unwrap();

  let stylist = Stylist::new(Arc::clone(&s), Arc::clone(&s)).with_phrases(FixedPhrase(2));
  let exchange = stylist.handle(owner, "Formatura da minha irmã").await.unwrap();

  let history = s.stream_for_owner(owner).await.unwrap();
  assert_eq!(history.len(), 2);
  assert_eq!(history[0].role, Speaker::User);
  assert_eq!(history[1], exchange.reply);

  let outfit = history[1].outfit.as_ref().unwrap();
  let names: Vec<_> = outfit.items().iter().map(|i| i.name.as_str()).collect();
  assert_eq!(names, ["gown", "heels"]);
}
