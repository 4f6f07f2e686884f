//! Keyword classification of free text into a formality and a climate.
//!
//! Rules are ordered: the first rule with a keyword occurring anywhere in the
//! lower-cased text wins. Formality rules run from the most formal occasion
//! down; text matching nothing falls back to [`Formality::Casual`]. Weather
//! rules are checked Hot, Cold, Rainy, Mild and may match nothing.

use serde::{Deserialize, Serialize};

use crate::{climate::ClimateCategory, item::Formality};

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Occasion keywords that imply a formality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccasionRule {
  pub keywords:  Vec<String>,
  pub formality: Formality,
}

/// Weather keywords that imply a climate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRule {
  pub keywords: Vec<String>,
  pub climate:  ClimateCategory,
}

fn words(list: &[&str]) -> Vec<String> {
  list.iter().map(|w| w.to_lowercase()).collect()
}

fn default_occasions() -> Vec<OccasionRule> {
  vec![
    OccasionRule {
      keywords:  words(&[
        "casamento",
        "formatura",
        "colação",
        "gala",
        "festa elegante",
        "cerimônia",
        "baile",
      ]),
      formality: Formality::Formal,
    },
    OccasionRule {
      keywords:  words(&[
        "jantar",
        "restaurante",
        "teatro",
        "ópera",
        "coquetel",
        "evento corporativo",
        "entrevista",
      ]),
      formality: Formality::SmartCasual,
    },
    OccasionRule {
      keywords:  words(&[
        "trabalho",
        "escritório",
        "reunião",
        "almoço",
        "café",
        "shopping",
        "faculdade",
        "aula",
      ]),
      formality: Formality::Casual,
    },
    OccasionRule {
      keywords:  words(&[
        "praia",
        "parque",
        "casa",
        "academia",
        "corrida",
        "fim de semana",
        "relaxar",
        "treino",
        "caminhada",
      ]),
      formality: Formality::Informal,
    },
  ]
}

fn default_weather() -> Vec<WeatherRule> {
  vec![
    WeatherRule {
      keywords: words(&["calor", "quente", "sol"]),
      climate:  ClimateCategory::Hot,
    },
    WeatherRule {
      keywords: words(&["frio", "gelado", "inverno"]),
      climate:  ClimateCategory::Cold,
    },
    WeatherRule {
      keywords: words(&["chuva", "chuvoso", "molhado"]),
      climate:  ClimateCategory::Rainy,
    },
    WeatherRule {
      keywords: words(&["ameno", "fresco"]),
      climate:  ClimateCategory::Mild,
    },
  ]
}

// ─── Classifier ──────────────────────────────────────────────────────────────

/// The outcome of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
  pub formality: Formality,
  pub climate:   Option<ClimateCategory>,
}

/// Immutable rule tables. Build once and share (e.g. behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Classifier {
  occasions: Vec<OccasionRule>,
  weather:   Vec<WeatherRule>,
  fallback:  Formality,
}

impl Default for Classifier {
  fn default() -> Self { Self::new(default_occasions(), default_weather()) }
}

impl Classifier {
  /// Build a classifier from custom ordered rule lists. Keywords are
  /// lower-cased here so matching only needs to lower-case the input.
  pub fn new(occasions: Vec<OccasionRule>, weather: Vec<WeatherRule>) -> Self {
    let occasions = occasions
      .into_iter()
      .map(|r| OccasionRule {
        keywords:  r.keywords.iter().map(|k| k.to_lowercase()).collect(),
        formality: r.formality,
      })
      .collect();
    let weather = weather
      .into_iter()
      .map(|r| WeatherRule {
        keywords: r.keywords.iter().map(|k| k.to_lowercase()).collect(),
        climate:  r.climate,
      })
      .collect();
    Self { occasions, weather, fallback: Formality::Casual }
  }

  pub fn formality(&self, text: &str) -> Formality {
    let text = text.to_lowercase();
    self
      .occasions
      .iter()
      .find(|rule| contains_any(&text, &rule.keywords))
      .map_or(self.fallback, |rule| rule.formality)
  }

  pub fn climate(&self, text: &str) -> Option<ClimateCategory> {
    let text = text.to_lowercase();
    self
      .weather
      .iter()
      .find(|rule| contains_any(&text, &rule.keywords))
      .map(|rule| rule.climate)
  }

  pub fn classify(&self, text: &str) -> Classification {
    Classification {
      formality: self.formality(text),
      climate:   self.climate(text),
    }
  }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
  keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn classifier() -> Classifier { Classifier::default() }

  #[test]
  fn formal_keywords_ignore_case() {
    let c = classifier();
    assert_eq!(c.formality("Vou a um CASAMENTO sábado"), Formality::Formal);
    assert_eq!(c.formality("casamento"), Formality::Formal);
    assert_eq!(c.formality("Baile de Gala"), Formality::Formal);
  }

  #[test]
  fn accented_keywords_ignore_case() {
    let c = classifier();
    assert_eq!(c.formality("CERIMÔNIA às 18h"), Formality::Formal);
    assert_eq!(c.formality("Reunião cedo"), Formality::Casual);
  }

  #[test]
  fn unmatched_text_defaults_to_casual() {
    let c = classifier();
    assert_eq!(c.formality("o que eu visto?"), Formality::Casual);
    assert_eq!(c.formality(""), Formality::Casual);
  }

  #[test]
  fn earlier_rule_wins() {
    let c = classifier();
    // "casamento" contains "casa"; the formal rule is checked first.
    assert_eq!(c.formality("casamento na praia"), Formality::Formal);
    assert_eq!(c.formality("jantar depois do trabalho"), Formality::SmartCasual);
    assert_eq!(c.formality("academia antes da aula"), Formality::Casual);
  }

  #[test]
  fn informal_occasions() {
    let c = classifier();
    assert_eq!(c.formality("dia de praia"), Formality::Informal);
    assert_eq!(c.formality("fim de semana tranquilo"), Formality::Informal);
  }

  #[test]
  fn no_weather_keyword_is_none() {
    assert_eq!(classifier().climate("jantar com amigos"), None);
    assert_eq!(classifier().climate(""), None);
  }

  #[test]
  fn single_weather_group() {
    let c = classifier();
    assert_eq!(c.climate("dia de CHUVA"), Some(ClimateCategory::Rainy));
    assert_eq!(c.climate("tempo ameno"), Some(ClimateCategory::Mild));
    assert_eq!(c.climate("muito gelado"), Some(ClimateCategory::Cold));
  }

  #[test]
  fn hot_beats_cold_beats_rainy_beats_mild() {
    let c = classifier();
    assert_eq!(c.climate("frio de manhã, calor à tarde"), Some(ClimateCategory::Hot));
    assert_eq!(c.climate("chuva e frio"), Some(ClimateCategory::Cold));
    assert_eq!(c.climate("fresco com chuva"), Some(ClimateCategory::Rainy));
  }

  #[test]
  fn meeting_on_a_cold_day() {
    let got = classifier().classify("Tenho uma reunião de trabalho hoje, está frio");
    assert_eq!(got, Classification {
      formality: Formality::Casual,
      climate:   Some(ClimateCategory::Cold),
    });
  }

  #[test]
  fn custom_rules_are_lowercased() {
    let c = Classifier::new(
      vec![OccasionRule {
        keywords:  vec!["Wedding".into()],
        formality: Formality::Formal,
      }],
      vec![WeatherRule {
        keywords: vec!["SNOW".into()],
        climate:  ClimateCategory::Cold,
      }],
    );
    assert_eq!(c.classify("a wedding in the snow"), Classification {
      formality: Formality::Formal,
      climate:   Some(ClimateCategory::Cold),
    });
    assert_eq!(c.formality("picnic"), Formality::Casual);
  }
}
