//! Wardrobe items: the garments an owner has registered.
//!
//! Items are read by the recommendation core as a point-in-time snapshot;
//! their lifecycle (creation, status changes, removal) belongs to a
//! [`WardrobeRepository`](crate::store::WardrobeRepository) backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use uuid::Uuid;

use crate::Error;

// ─── Formality ───────────────────────────────────────────────────────────────

/// The social register an occasion calls for.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Formality {
  Formal,
  SmartCasual,
  Casual,
  Informal,
}

impl Formality {
  /// Label used in generated replies.
  pub fn label(self) -> &'static str {
    match self {
      Self::Formal => "Formal",
      Self::SmartCasual => "Esporte Fino",
      Self::Casual => "Casual",
      Self::Informal => "Informal",
    }
  }
}

/// The formality attribute of an item: a single level, or the set of levels
/// the item is appropriate for.
///
/// Never empty. [`FormalityFit::many`] and deserialisation both reject an
/// empty set and collapse a one-element set into [`FormalityFit::One`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FitRepr", into = "FitRepr")]
pub enum FormalityFit {
  One(Formality),
  Many(Vec<Formality>),
}

impl FormalityFit {
  /// Build a fit from any number of levels. Duplicates are dropped, first
  /// occurrence wins.
  pub fn many(levels: impl IntoIterator<Item = Formality>) -> Result<Self, Error> {
    let mut unique: Vec<Formality> = Vec::new();
    for level in levels {
      if !unique.contains(&level) {
        unique.push(level);
      }
    }
    match unique.len() {
      0 => Err(Error::EmptyFormality),
      1 => Ok(Self::One(unique[0])),
      _ => Ok(Self::Many(unique)),
    }
  }

  /// Whether an item with this fit may be worn at `target` formality.
  pub fn matches(&self, target: Formality) -> bool {
    self.levels().contains(&target)
  }

  pub fn levels(&self) -> &[Formality] {
    match self {
      Self::One(level) => std::slice::from_ref(level),
      Self::Many(levels) => levels,
    }
  }
}

impl From<Formality> for FormalityFit {
  fn from(level: Formality) -> Self { Self::One(level) }
}

/// Wire shape: a bare string or an array of strings.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FitRepr {
  One(Formality),
  Many(Vec<Formality>),
}

impl TryFrom<FitRepr> for FormalityFit {
  type Error = Error;

  fn try_from(repr: FitRepr) -> Result<Self, Self::Error> {
    match repr {
      FitRepr::One(level) => Ok(Self::One(level)),
      FitRepr::Many(levels) => Self::many(levels),
    }
  }
}

impl From<FormalityFit> for FitRepr {
  fn from(fit: FormalityFit) -> Self {
    match fit {
      FormalityFit::One(level) => Self::One(level),
      FormalityFit::Many(levels) => Self::Many(levels),
    }
  }
}

// ─── Garments ────────────────────────────────────────────────────────────────

/// The slot a garment fills when an outfit is put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
  /// Stands in for both a top and a bottom.
  Dress,
  Top,
  Bottom,
  Footwear,
}

/// The closed set of garment types an item can be registered as.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GarmentCategory {
  Dress,
  Pants,
  Blouse,
  Shirt,
  Shoe,
  Sneaker,
  Blazer,
  Skirt,
  Jacket,
  Coat,
  Shorts,
  Sweatshirt,
}

impl GarmentCategory {
  pub fn slot(self) -> Slot {
    match self {
      Self::Dress => Slot::Dress,
      Self::Blouse
      | Self::Shirt
      | Self::Blazer
      | Self::Jacket
      | Self::Sweatshirt
      | Self::Coat => Slot::Top,
      Self::Pants | Self::Skirt | Self::Shorts => Slot::Bottom,
      Self::Shoe | Self::Sneaker => Slot::Footwear,
    }
  }

  /// Display name shown to the owner.
  pub fn label(self) -> &'static str {
    match self {
      Self::Dress => "Vestido",
      Self::Pants => "Calça",
      Self::Blouse => "Blusa",
      Self::Shirt => "Camisa",
      Self::Shoe => "Sapato",
      Self::Sneaker => "Tênis",
      Self::Blazer => "Blazer",
      Self::Skirt => "Saia",
      Self::Jacket => "Jaqueta",
      Self::Coat => "Casaco",
      Self::Shorts => "Shorts",
      Self::Sweatshirt => "Moletom",
    }
  }
}

// ─── Cleanliness ─────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  AsRefStr,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cleanliness {
  #[default]
  Clean,
  Dirty,
}

// ─── Items ───────────────────────────────────────────────────────────────────

/// A single garment owned by one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
  pub item_id:    Uuid,
  pub owner_id:   Uuid,
  pub name:       String,
  pub category:   GarmentCategory,
  /// Free-form colour label, e.g. "navy".
  pub color:      String,
  pub formality:  FormalityFit,
  pub status:     Cleanliness,
  /// Opaque reference to an image held elsewhere.
  pub image_ref:  Option<String>,
  pub created_at: DateTime<Utc>,
}

impl WardrobeItem {
  pub fn is_clean(&self) -> bool { self.status == Cleanliness::Clean }
}

/// Input to [`crate::store::WardrobeRepository::add_item`].
///
/// The identifier and creation time are assigned by the store; new items
/// always start out [`Cleanliness::Clean`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
  pub name:      String,
  pub category:  GarmentCategory,
  pub color:     String,
  pub formality: FormalityFit,
  #[serde(default)]
  pub image_ref: Option<String>,
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn single_fit_matches_only_its_level() {
    let fit = FormalityFit::from(Formality::Casual);
    assert!(fit.matches(Formality::Casual));
    assert!(!fit.matches(Formality::Formal));
  }

  #[test]
  fn multi_fit_matches_any_member() {
    let fit =
      FormalityFit::many([Formality::Casual, Formality::Informal]).unwrap();
    assert!(fit.matches(Formality::Casual));
    assert!(fit.matches(Formality::Informal));
    assert!(!fit.matches(Formality::SmartCasual));
  }

  #[test]
  fn empty_fit_is_rejected() {
    assert!(matches!(
      FormalityFit::many(Vec::new()),
      Err(Error::EmptyFormality)
    ));
  }

  #[test]
  fn one_element_set_collapses() {
    let fit =
      FormalityFit::many([Formality::Formal, Formality::Formal]).unwrap();
    assert_eq!(fit, FormalityFit::One(Formality::Formal));
  }

  #[test]
  fn fit_deserialises_string_or_array() {
    let one: FormalityFit = serde_json::from_str("\"smart_casual\"").unwrap();
    assert_eq!(one, FormalityFit::One(Formality::SmartCasual));

    let many: FormalityFit =
      serde_json::from_str("[\"formal\",\"smart_casual\"]").unwrap();
    assert_eq!(many.levels(), &[Formality::Formal, Formality::SmartCasual]);

    assert!(serde_json::from_str::<FormalityFit>("[]").is_err());
  }

  #[test]
  fn fit_serialises_untagged() {
    let json = serde_json::to_string(&FormalityFit::One(Formality::Informal))
      .unwrap();
    assert_eq!(json, "\"informal\"");
  }

  #[test]
  fn every_category_has_a_slot() {
    let dresses: Vec<_> = GarmentCategory::iter()
      .filter(|c| c.slot() == Slot::Dress)
      .collect();
    assert_eq!(dresses, vec![GarmentCategory::Dress]);
    assert_eq!(GarmentCategory::Sneaker.slot(), Slot::Footwear);
    assert_eq!(GarmentCategory::Coat.slot(), Slot::Top);
    assert_eq!(GarmentCategory::Shorts.slot(), Slot::Bottom);
  }

  #[test]
  fn category_parses_from_snake_case() {
    assert_eq!(
      "sweatshirt".parse::<GarmentCategory>().unwrap(),
      GarmentCategory::Sweatshirt
    );
    assert_eq!(GarmentCategory::Sneaker.as_ref(), "sneaker");
  }
}
