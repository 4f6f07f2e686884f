//! Plain-text rendering of API responses.

use std::fmt::Write as _;

use closet_core::{
  compose::Outfit,
  item::{Cleanliness, WardrobeItem},
  message::{ConversationMessage, Speaker},
};

/// One line per item: id, category, name, colour, formality, status.
pub fn item_line(item: &WardrobeItem) -> String {
  let levels: Vec<&str> = item.formality.levels().iter().map(|f| f.label()).collect();
  let status = match item.status {
    Cleanliness::Clean => "clean",
    Cleanliness::Dirty => "dirty",
  };
  format!(
    "{}  {:<8} {} ({}) [{}] {status}",
    item.item_id,
    item.category.label(),
    item.name,
    item.color,
    levels.join(", "),
  )
}

pub fn outfit(outfit: &Outfit) -> String {
  let mut out = String::new();
  for item in outfit.items() {
    let _ = writeln!(out, "  • {}: {} ({})", item.category.label(), item.name, item.color);
  }
  out
}

pub fn message(msg: &ConversationMessage) -> String {
  let who = match msg.role {
    Speaker::User => "you",
    Speaker::Assistant => "stylist",
  };
  let mut out = format!(
    "[{}] {who}: {}\n",
    msg.sent_at.format("%Y-%m-%d %H:%M"),
    msg.content
  );
  if let Some(look) = &msg.outfit {
    out.push_str(&outfit(look));
  }
  out
}
