//! Handlers for the conversation endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/owners/:owner_id/chat` | Body: `{"text":"..."}`; returns 201 + [`Exchange`] |
//! | `GET`  | `/owners/:owner_id/suggest` | `?text=...`; recommendation only, nothing recorded |
//! | `GET`  | `/owners/:owner_id/messages` | Conversation history, oldest first |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use closet_core::{
  message::ConversationMessage,
  stylist::{Exchange, Suggestion},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, Backend, error::ApiError};

// ─── Send ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatBody {
  pub text: String,
}

/// `POST /owners/:owner_id/chat`. Blank text is rejected before anything is
/// recorded.
pub async fn send<S: Backend>(
  State(state): State<ApiState<S>>,
  Path(owner_id): Path<Uuid>,
  Json(body): Json<ChatBody>,
) -> Result<impl IntoResponse, ApiError> {
  let text = body.text.trim();
  if text.is_empty() {
    return Err(ApiError::BadRequest("text must not be empty".into()));
  }

  let exchange: Exchange = state
    .stylist
    .handle(owner_id, text)
    .await
    .map_err(ApiError::Unavailable)?;
  Ok((StatusCode::CREATED, Json(exchange)))
}

// ─── Suggest ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
  #[serde(default)]
  pub text: String,
}

/// `GET /owners/:owner_id/suggest?text=...`
pub async fn suggest<S: Backend>(
  State(state): State<ApiState<S>>,
  Path(owner_id): Path<Uuid>,
  Query(params): Query<SuggestParams>,
) -> Result<Json<Suggestion>, ApiError> {
  let suggestion = state
    .stylist
    .suggest(owner_id, &params.text)
    .await
    .map_err(ApiError::Unavailable)?;
  Ok(Json(suggestion))
}

// ─── History ──────────────────────────────────────────────────────────────────

/// `GET /owners/:owner_id/messages`
pub async fn history<S: Backend>(
  State(state): State<ApiState<S>>,
  Path(owner_id): Path<Uuid>,
) -> Result<Json<Vec<ConversationMessage>>, ApiError> {
  let messages = state
    .store
    .stream_for_owner(owner_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(messages))
}
