//! Handlers for wardrobe management.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/owners/:owner_id/items` | Items in the order they were added |
//! | `POST`   | `/owners/:owner_id/items` | Body: [`NewItem`]; returns 201 + stored item |
//! | `GET`    | `/owners/:owner_id/items/:item_id` | 404 if not found |
//! | `PUT`    | `/owners/:owner_id/items/:item_id/status` | Body: `{"status":"clean"\|"dirty"}` |
//! | `DELETE` | `/owners/:owner_id/items/:item_id` | 204, or 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use closet_core::item::{Cleanliness, NewItem, WardrobeItem};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, Backend, error::ApiError};

fn item_not_found(item_id: Uuid) -> ApiError {
  ApiError::NotFound(format!("item {item_id} not found"))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /owners/:owner_id/items`
pub async fn list<S: Backend>(
  State(state): State<ApiState<S>>,
  Path(owner_id): Path<Uuid>,
) -> Result<Json<Vec<WardrobeItem>>, ApiError> {
  let items = state
    .store
    .list_for_owner(owner_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(items))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /owners/:owner_id/items`
pub async fn create<S: Backend>(
  State(state): State<ApiState<S>>,
  Path(owner_id): Path<Uuid>,
  Json(body): Json<NewItem>,
) -> Result<impl IntoResponse, ApiError> {
  if body.name.trim().is_empty() || body.color.trim().is_empty() {
    return Err(ApiError::BadRequest("name and color are required".into()));
  }

  let item = state
    .store
    .add_item(owner_id, body)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(item)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /owners/:owner_id/items/:item_id`
pub async fn get_one<S: Backend>(
  State(state): State<ApiState<S>>,
  Path((owner_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<WardrobeItem>, ApiError> {
  let item = state
    .store
    .get_item(owner_id, item_id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| item_not_found(item_id))?;
  Ok(Json(item))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: Cleanliness,
}

/// `PUT /owners/:owner_id/items/:item_id/status`
pub async fn set_status<S: Backend>(
  State(state): State<ApiState<S>>,
  Path((owner_id, item_id)): Path<(Uuid, Uuid)>,
  Json(body): Json<StatusBody>,
) -> Result<Json<WardrobeItem>, ApiError> {
  let item = state
    .store
    .set_status(owner_id, item_id, body.status)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| item_not_found(item_id))?;
  Ok(Json(item))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /owners/:owner_id/items/:item_id`
pub async fn remove<S: Backend>(
  State(state): State<ApiState<S>>,
  Path((owner_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
  let removed = state
    .store
    .remove_item(owner_id, item_id)
    .await
    .map_err(ApiError::store)?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(item_not_found(item_id))
  }
}
