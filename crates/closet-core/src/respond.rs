//! Templated replies.
//!
//! When an outfit was found, one of three phrasings for the formality is
//! chosen through a [`PhraseSource`]; otherwise a fixed message asks the
//! owner to add more clean items. The choice only affects wording.

use rand_core::{OsRng, RngCore};

use crate::{climate::ClimateCategory, item::Formality};

// ─── Phrase sources ──────────────────────────────────────────────────────────

/// Picks which of `len` phrasings to use. Must return an index in `0..len`
/// for any `len > 0`.
pub trait PhraseSource: Send + Sync {
  fn pick(&self, len: usize) -> usize;
}

/// Uniform choice backed by the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPhrases;

impl PhraseSource for OsPhrases {
  fn pick(&self, len: usize) -> usize {
    let len = len.max(1) as u64;
    // Reject draws from the incomplete final bucket so every index is equally
    // likely.
    let zone = u64::MAX - (u64::MAX % len);
    loop {
      let draw = OsRng.next_u64();
      if draw < zone {
        return (draw % len) as usize;
      }
    }
  }
}

/// Always picks the same phrasing (modulo the number available).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPhrase(pub usize);

impl PhraseSource for FixedPhrase {
  fn pick(&self, len: usize) -> usize { self.0 % len.max(1) }
}

// ─── Templates ───────────────────────────────────────────────────────────────

fn variants(formality: Formality, clause: &str) -> [String; 3] {
  match formality {
    Formality::Formal => [
      format!(
        "Excelente! Para uma ocasião formal{clause}, preparei uma combinação \
         elegante e sofisticada:"
      ),
      format!(
        "Perfeito! Montei um look impecável para esse evento formal{clause}:"
      ),
      format!(
        "Que ocasião especial! Aqui está uma combinação formal{clause} que vai \
         te deixar incrível:"
      ),
    ],
    Formality::SmartCasual => [
      format!(
        "Ótima escolha! Para um evento esporte fino{clause}, selecionei esta \
         combinação equilibrada:"
      ),
      format!(
        "Perfeito! Montei um look esporte fino{clause} que une elegância e \
         conforto:"
      ),
      format!(
        "Para essa ocasião esporte fino{clause}, preparei uma combinação \
         sofisticada:"
      ),
    ],
    Formality::Casual => [
      format!(
        "Entendi! Para um dia casual{clause}, montei esta combinação \
         confortável e estilosa:"
      ),
      format!(
        "Perfeito! Aqui está um look casual{clause} que vai te deixar super \
         confortável:"
      ),
      format!(
        "Para o dia a dia{clause}, selecionei esta combinação casual e prática:"
      ),
    ],
    Formality::Informal => [
      format!(
        "Beleza! Para um momento mais descontraído{clause}, preparei este look \
         informal:"
      ),
      format!(
        "Perfeito! Montei uma combinação super confortável{clause} para relaxar:"
      ),
      format!(
        "Para esse momento informal{clause}, selecionei peças confortáveis e \
         práticas:"
      ),
    ],
  }
}

/// Produce the reply for a composed outfit.
pub fn generate(
  formality: Formality,
  has_items: bool,
  climate: Option<ClimateCategory>,
  phrases: &dyn PhraseSource,
) -> String {
  if !has_items {
    let clause = climate
      .map(|c| format!(" com clima {}", c.label().to_lowercase()))
      .unwrap_or_default();
    return format!(
      "Percebi que você quer um look para uma ocasião {}{clause}, mas ainda não \
       há peças limpas suficientes no seu guarda-roupa com essas \
       características. Que tal adicionar mais peças fotografando suas roupas? \
       📸",
      formality.label()
    );
  }

  let clause = climate
    .map(|c| format!(" perfeito para o clima {}", c.label().to_lowercase()))
    .unwrap_or_default();
  let options = variants(formality, &clause);
  let index = phrases.pick(options.len()).min(options.len() - 1);
  let [a, b, c] = options;
  match index {
    0 => a,
    1 => b,
    _ => c,
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn empty_outfit_message_names_the_request() {
    let text = generate(
      Formality::Informal,
      false,
      Some(ClimateCategory::Hot),
      &FixedPhrase(0),
    );
    assert!(text.contains("não há peças limpas suficientes"), "{text}");
    assert!(text.contains("Informal"), "{text}");
    assert!(text.contains("com clima quente"), "{text}");
  }

  #[test]
  fn empty_outfit_message_is_deterministic() {
    let a = generate(Formality::SmartCasual, false, None, &FixedPhrase(0));
    let b = generate(Formality::SmartCasual, false, None, &FixedPhrase(2));
    assert_eq!(a, b);
    assert!(a.contains("Esporte Fino"));
    assert!(!a.contains("clima"));
  }

  #[test]
  fn each_formality_has_three_distinct_phrasings() {
    for formality in Formality::iter() {
      let texts: Vec<String> = (0..3)
        .map(|i| generate(formality, true, None, &FixedPhrase(i)))
        .collect();
      assert_ne!(texts[0], texts[1]);
      assert_ne!(texts[1], texts[2]);
      assert_ne!(texts[0], texts[2]);
    }
  }

  #[test]
  fn climate_clause_is_interpolated() {
    let text = generate(
      Formality::Formal,
      true,
      Some(ClimateCategory::Rainy),
      &FixedPhrase(1),
    );
    assert_eq!(
      text,
      "Perfeito! Montei um look impecável para esse evento formal perfeito \
       para o clima chuvoso:"
    );
  }

  #[test]
  fn fixed_phrase_wraps() {
    let first = generate(Formality::Casual, true, None, &FixedPhrase(0));
    let wrapped = generate(Formality::Casual, true, None, &FixedPhrase(3));
    assert_eq!(first, wrapped);
  }

  #[test]
  fn os_phrases_stay_in_range() {
    let source = OsPhrases;
    for _ in 0..200 {
      assert!(source.pick(3) < 3);
    }
    assert_eq!(source.pick(1), 0);
  }
}
