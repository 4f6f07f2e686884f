//! JSON REST API for Closet.
//!
//! Exposes an axum [`Router`] backed by any store implementing both
//! [`WardrobeRepository`] and [`ConversationStore`]. Auth, TLS, and transport
//! concerns are the caller's responsibility; every route is scoped to an
//! owner id taken from the path.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", closet_api::api_router(ApiState::new(store.clone())))
//! ```

pub mod chat;
pub mod error;
pub mod items;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use closet_core::{
  store::{ConversationStore, WardrobeRepository},
  stylist::Stylist,
};

pub use error::ApiError;

/// A storage backend able to serve every route.
pub trait Backend: WardrobeRepository + ConversationStore + 'static {}

impl<S> Backend for S where S: WardrobeRepository + ConversationStore + 'static {}

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub store:   Arc<S>,
  pub stylist: Stylist<S, S>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      stylist: self.stylist.clone(),
    }
  }
}

impl<S: Backend> ApiState<S> {
  /// State whose stylist reads and writes through `store`.
  pub fn new(store: Arc<S>) -> Self {
    let stylist = Stylist::new(Arc::clone(&store), Arc::clone(&store));
    Self { store, stylist }
  }

  pub fn with_stylist(store: Arc<S>, stylist: Stylist<S, S>) -> Self {
    Self { store, stylist }
  }
}

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S: Backend>(state: ApiState<S>) -> Router<()> {
  Router::new()
    // Conversation
    .route("/owners/{owner_id}/chat", post(chat::send::<S>))
    .route("/owners/{owner_id}/suggest", get(chat::suggest::<S>))
    .route("/owners/{owner_id}/messages", get(chat::history::<S>))
    // Wardrobe
    .route(
      "/owners/{owner_id}/items",
      get(items::list::<S>).post(items::create::<S>),
    )
    .route(
      "/owners/{owner_id}/items/{item_id}",
      get(items::get_one::<S>).delete(items::remove::<S>),
    )
    .route(
      "/owners/{owner_id}/items/{item_id}/status",
      put(items::set_status::<S>),
    )
    .with_state(state)
}
