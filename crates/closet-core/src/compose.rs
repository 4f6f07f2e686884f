//! Outfit composition.
//!
//! Candidates are the clean items fitting the requested formality (and, if
//! given, the climate). From those the first dress is taken, or failing that
//! the first top and the first bottom; the first footwear is appended either
//! way. "First" means first in inventory order. An empty outfit is a valid
//! result meaning nothing suitable is available.

use serde::{Deserialize, Serialize};

use crate::{
  climate::{self, ClimateCategory},
  item::{Formality, Slot, WardrobeItem},
};

/// The items picked for one request, in wearing order: dress or top and
/// bottom, then footwear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outfit(Vec<WardrobeItem>);

impl Outfit {
  pub fn items(&self) -> &[WardrobeItem] { &self.0 }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }
}

impl From<Vec<WardrobeItem>> for Outfit {
  fn from(items: Vec<WardrobeItem>) -> Self { Self(items) }
}

/// Whether `item` may be worn for this request at all.
fn is_candidate(
  item: &WardrobeItem,
  formality: Formality,
  climate: Option<ClimateCategory>,
) -> bool {
  item.is_clean()
    && item.formality.matches(formality)
    && climate::suits(item.category, climate)
}

/// Select one outfit from `inventory`.
pub fn compose(
  inventory: &[WardrobeItem],
  formality: Formality,
  climate: Option<ClimateCategory>,
) -> Outfit {
  let candidates: Vec<&WardrobeItem> = inventory
    .iter()
    .filter(|item| is_candidate(item, formality, climate))
    .collect();

  let first_in = |slot: Slot| {
    candidates
      .iter()
      .find(|item| item.category.slot() == slot)
      .map(|item| (*item).clone())
  };

  let mut picked = Vec::with_capacity(3);
  if let Some(dress) = first_in(Slot::Dress) {
    picked.push(dress);
  } else {
    picked.extend(first_in(Slot::Top));
    picked.extend(first_in(Slot::Bottom));
  }
  picked.extend(first_in(Slot::Footwear));

  tracing::debug!(
    ?formality,
    ?climate,
    candidates = candidates.len(),
    picked = picked.len(),
    "composed outfit"
  );

  Outfit(picked)
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use uuid::Uuid;

  use super::*;
  use crate::item::{
    Cleanliness, FormalityFit,
    GarmentCategory::{self, *},
  };

  fn item(
    name: &str,
    category: GarmentCategory,
    formality: impl Into<FormalityFit>,
    status: Cleanliness,
  ) -> WardrobeItem {
    WardrobeItem {
      item_id: Uuid::new_v4(),
      owner_id: Uuid::nil(),
      name: name.into(),
      category,
      color: "black".into(),
      formality: formality.into(),
      status,
      image_ref: None,
      created_at: Utc::now(),
    }
  }

  fn clean(name: &str, category: GarmentCategory, f: Formality) -> WardrobeItem {
    item(name, category, f, Cleanliness::Clean)
  }

  fn names(outfit: &Outfit) -> Vec<&str> {
    outfit.items().iter().map(|i| i.name.as_str()).collect()
  }

  #[test]
  fn dress_and_shoe_for_a_formal_event() {
    let inventory = vec![
      clean("gown", Dress, Formality::Formal),
      clean("heels", Shoe, Formality::Formal),
    ];
    let outfit = compose(&inventory, Formality::Formal, None);
    assert_eq!(names(&outfit), ["gown", "heels"]);
  }

  #[test]
  fn cold_day_keeps_only_the_pants() {
    let inventory = vec![
      clean("tee", Shirt, Formality::Casual),
      clean("jeans", Pants, Formality::Casual),
      item("hoodie", Sweatshirt, Formality::Casual, Cleanliness::Dirty),
    ];
    let outfit = compose(&inventory, Formality::Casual, Some(ClimateCategory::Cold));
    assert_eq!(names(&outfit), ["jeans"]);
  }

  #[test]
  fn top_bottom_then_footwear() {
    let inventory = vec![
      clean("sneakers", Sneaker, Formality::Casual),
      clean("skirt", Skirt, Formality::Casual),
      clean("blouse", Blouse, Formality::Casual),
    ];
    let outfit = compose(&inventory, Formality::Casual, None);
    assert_eq!(names(&outfit), ["blouse", "skirt", "sneakers"]);
  }

  #[test]
  fn dress_supersedes_separates() {
    let inventory = vec![
      clean("shirt", Shirt, Formality::SmartCasual),
      clean("trousers", Pants, Formality::SmartCasual),
      clean("dress", Dress, Formality::SmartCasual),
    ];
    let outfit = compose(&inventory, Formality::SmartCasual, None);
    assert_eq!(names(&outfit), ["dress"]);
    assert!(outfit.items().iter().all(|i| i.category.slot() == Slot::Dress));
  }

  #[test]
  fn first_encountered_wins() {
    let inventory = vec![
      clean("white shirt", Shirt, Formality::Casual),
      clean("blue shirt", Shirt, Formality::Casual),
      clean("black jeans", Pants, Formality::Casual),
      clean("grey jeans", Pants, Formality::Casual),
    ];
    let outfit = compose(&inventory, Formality::Casual, None);
    assert_eq!(names(&outfit), ["white shirt", "black jeans"]);
  }

  #[test]
  fn dirty_items_are_never_picked() {
    let inventory = vec![
      item("dirty dress", Dress, Formality::Formal, Cleanliness::Dirty),
      item("dirty shoes", Shoe, Formality::Formal, Cleanliness::Dirty),
      clean("blazer", Blazer, Formality::Formal),
    ];
    let outfit = compose(&inventory, Formality::Formal, None);
    assert_eq!(names(&outfit), ["blazer"]);
    assert!(outfit.items().iter().all(WardrobeItem::is_clean));
  }

  #[test]
  fn multi_formality_items_are_candidates() {
    let versatile =
      FormalityFit::many([Formality::Casual, Formality::Informal]).unwrap();
    let inventory = vec![item("chinos", Pants, versatile, Cleanliness::Clean)];
    assert_eq!(names(&compose(&inventory, Formality::Informal, None)), ["chinos"]);
    assert_eq!(names(&compose(&inventory, Formality::Casual, None)), ["chinos"]);
    assert!(compose(&inventory, Formality::Formal, None).is_empty());
  }

  #[test]
  fn nothing_suitable_is_an_empty_outfit() {
    assert!(compose(&[], Formality::Casual, None).is_empty());

    let inventory = vec![clean("coat", Coat, Formality::Casual)];
    let outfit = compose(&inventory, Formality::Casual, Some(ClimateCategory::Hot));
    assert!(outfit.is_empty());
  }
}
