//! Weather buckets and the garments considered suitable for each.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::item::GarmentCategory::{self, *};

/// A coarse weather bucket. Absence (`None`) means no weather constraint.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ClimateCategory {
  Hot,
  Mild,
  Cold,
  Rainy,
}

impl ClimateCategory {
  /// Label used in generated replies.
  pub fn label(self) -> &'static str {
    match self {
      Self::Hot => "Quente",
      Self::Mild => "Ameno",
      Self::Cold => "Frio",
      Self::Rainy => "Chuvoso",
    }
  }
}

const HOT: &[GarmentCategory] = &[Blouse, Shirt, Shorts, Dress, Skirt, Sneaker];
const MILD: &[GarmentCategory] =
  &[Blouse, Shirt, Pants, Dress, Skirt, Jacket, Sneaker, Shoe];
const COLD: &[GarmentCategory] =
  &[Sweatshirt, Coat, Jacket, Pants, Blazer, Shoe, Sneaker];
const RAINY: &[GarmentCategory] = &[Jacket, Coat, Pants, Sweatshirt, Sneaker];

/// The garment categories suitable for `climate`.
pub fn categories_for(climate: ClimateCategory) -> &'static [GarmentCategory] {
  match climate {
    ClimateCategory::Hot => HOT,
    ClimateCategory::Mild => MILD,
    ClimateCategory::Cold => COLD,
    ClimateCategory::Rainy => RAINY,
  }
}

/// Whether `category` is suitable for `climate`; `None` accepts everything.
pub fn suits(category: GarmentCategory, climate: Option<ClimateCategory>) -> bool {
  climate.is_none_or(|c| categories_for(c).contains(&category))
}
