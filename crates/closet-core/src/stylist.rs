//! The conversation orchestrator.
//!
//! For each incoming message the [`Stylist`] records the owner's text,
//! classifies it, reads the wardrobe snapshot, composes an outfit, phrases a
//! reply and records that too, strictly in that order. A storage failure
//! stops the pipeline where it happens; no reply is recorded after a failed
//! step.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  classify::{Classification, Classifier},
  compose::{Outfit, compose},
  item::WardrobeItem,
  message::ConversationMessage,
  respond::{OsPhrases, PhraseSource, generate},
  store::{ConversationStore, WardrobeRepository},
};

/// Both sides of one handled message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
  pub classification: Classification,
  pub request:        ConversationMessage,
  pub reply:          ConversationMessage,
}

/// A recommendation that was not recorded in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
  pub classification: Classification,
  pub outfit:         Outfit,
  pub text:           String,
}

/// Sequences classification, composition and phrasing over the storage
/// collaborators. Holds only shared immutable handles, so clones are cheap and
/// independent messages can be handled concurrently.
pub struct Stylist<W, C> {
  wardrobe:   Arc<W>,
  chat:       Arc<C>,
  classifier: Arc<Classifier>,
  phrases:    Arc<dyn PhraseSource>,
}

impl<W, C> Clone for Stylist<W, C> {
  fn clone(&self) -> Self {
    Self {
      wardrobe:   Arc::clone(&self.wardrobe),
      chat:       Arc::clone(&self.chat),
      classifier: Arc::clone(&self.classifier),
      phrases:    Arc::clone(&self.phrases),
    }
  }
}

impl<W, C> Stylist<W, C>
where
  W: WardrobeRepository,
  C: ConversationStore,
{
  /// A stylist with the built-in keyword tables and random phrasing.
  pub fn new(wardrobe: Arc<W>, chat: Arc<C>) -> Self {
    Self {
      wardrobe,
      chat,
      classifier: Arc::new(Classifier::default()),
      phrases: Arc::new(OsPhrases),
    }
  }

  pub fn with_classifier(mut self, classifier: Arc<Classifier>) -> Self {
    self.classifier = classifier;
    self
  }

  pub fn with_phrases(mut self, phrases: impl PhraseSource + 'static) -> Self {
    self.phrases = Arc::new(phrases);
    self
  }

  pub fn classifier(&self) -> &Classifier { &self.classifier }

  /// Handle one message from `owner_id`, recording both sides of the
  /// exchange.
  pub async fn handle(&self, owner_id: Uuid, text: &str) -> Result<Exchange> {
    let request = ConversationMessage::from_user(owner_id, text);
    self.chat.append(request.clone()).await.map_err(|e| {
      tracing::warn!(%owner_id, error = %e, "failed to record user message");
      Error::storage(e)
    })?;

    let classification = self.classifier.classify(text);
    tracing::debug!(%owner_id, ?classification, "classified message");

    let inventory = self.snapshot(owner_id).await?;
    let (outfit, content) = self.recommend(classification, &inventory);

    let reply = ConversationMessage::from_assistant(owner_id, content, outfit);
    self.chat.append(reply.clone()).await.map_err(|e| {
      tracing::warn!(%owner_id, error = %e, "failed to record reply");
      Error::storage(e)
    })?;

    tracing::info!(
      %owner_id,
      formality = ?classification.formality,
      climate = ?classification.climate,
      items = reply.outfit.as_ref().map_or(0, Outfit::len),
      "handled message"
    );

    Ok(Exchange { classification, request, reply })
  }

  /// Recommend an outfit for `text` without recording anything.
  pub async fn suggest(&self, owner_id: Uuid, text: &str) -> Result<Suggestion> {
    let classification = self.classifier.classify(text);
    let inventory = self.snapshot(owner_id).await?;
    let (outfit, text) = self.recommend(classification, &inventory);
    Ok(Suggestion { classification, outfit, text })
  }

  async fn snapshot(&self, owner_id: Uuid) -> Result<Vec<WardrobeItem>> {
    self.wardrobe.list_for_owner(owner_id).await.map_err(|e| {
      tracing::warn!(%owner_id, error = %e, "failed to read wardrobe");
      Error::storage(e)
    })
  }

  fn recommend(
    &self,
    classification: Classification,
    inventory: &[WardrobeItem],
  ) -> (Outfit, String) {
    let Classification { formality, climate } = classification;
    let outfit = compose(inventory, formality, climate);
    let text = generate(formality, !outfit.is_empty(), climate, &*self.phrases);
    (outfit, text)
  }
}
