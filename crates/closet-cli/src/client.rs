//! Async HTTP client wrapping the closet JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use closet_core::{
  item::{Cleanliness, NewItem, WardrobeItem},
  message::ConversationMessage,
  stylist::Exchange,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

/// Connection settings for the closet API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub owner_id: Uuid,
}

/// Async HTTP client for one owner's routes.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api/owners/{}{}",
      self.config.base_url.trim_end_matches('/'),
      self.config.owner_id,
      path
    )
  }

  /// Turn a non-success status into an error carrying the server's message.
  async fn decode<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
      let body: serde_json::Value = resp.json().await.unwrap_or_default();
      let message = body["error"].as_str().unwrap_or("no details");
      return Err(anyhow!("{what} failed with {status}: {message}"));
    }
    resp.json().await.with_context(|| format!("deserialising {what}"))
  }

  // ── Conversation ──────────────────────────────────────────────────────────

  /// `POST /chat`
  pub async fn ask(&self, text: &str) -> Result<Exchange> {
    let resp = self
      .client
      .post(self.url("/chat"))
      .json(&json!({ "text": text }))
      .send()
      .await
      .context("POST /chat failed")?;
    Self::decode(resp, "POST /chat").await
  }

  /// `GET /messages`
  pub async fn history(&self) -> Result<Vec<ConversationMessage>> {
    let resp = self
      .client
      .get(self.url("/messages"))
      .send()
      .await
      .context("GET /messages failed")?;
    Self::decode(resp, "GET /messages").await
  }

  // ── Wardrobe ──────────────────────────────────────────────────────────────

  /// `GET /items`
  pub async fn items(&self) -> Result<Vec<WardrobeItem>> {
    let resp = self
      .client
      .get(self.url("/items"))
      .send()
      .await
      .context("GET /items failed")?;
    Self::decode(resp, "GET /items").await
  }

  /// `POST /items`
  pub async fn add_item(&self, item: &NewItem) -> Result<WardrobeItem> {
    let resp = self
      .client
      .post(self.url("/items"))
      .json(item)
      .send()
      .await
      .context("POST /items failed")?;
    Self::decode(resp, "POST /items").await
  }

  /// `PUT /items/:id/status`
  pub async fn set_status(&self, item_id: Uuid, status: Cleanliness) -> Result<WardrobeItem> {
    let resp = self
      .client
      .put(self.url(&format!("/items/{item_id}/status")))
      .json(&json!({ "status": status }))
      .send()
      .await
      .context("PUT /items/:id/status failed")?;
    Self::decode(resp, "PUT /items/:id/status").await
  }

  /// `DELETE /items/:id`
  pub async fn remove_item(&self, item_id: Uuid) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/items/{item_id}")))
      .send()
      .await
      .context("DELETE /items/:id failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("DELETE /items/{item_id} failed with {}", resp.status()));
    }
    Ok(())
  }
}
