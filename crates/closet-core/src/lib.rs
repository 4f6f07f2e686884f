//! Core types and recommendation logic for the Closet wardrobe assistant.
//!
//! Everything in this crate apart from the [`stylist`] orchestrator is pure:
//! classification, climate filtering, outfit composition and response
//! phrasing take their inputs by reference and touch no shared state.
//! Storage lives behind the traits in [`store`]; this crate has no HTTP or
//! database dependencies.

// Native `async fn` in traits; the futures are declared `Send` explicitly.
#![allow(async_fn_in_trait)]

pub mod classify;
pub mod climate;
pub mod compose;
pub mod error;
pub mod item;
pub mod message;
pub mod respond;
pub mod store;
pub mod stylist;

pub use error::{Error, Result};
