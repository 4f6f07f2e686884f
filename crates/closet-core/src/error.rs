//! Error types for `closet-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("an item must be appropriate for at least one formality")]
  EmptyFormality,

  /// A collaborator (wardrobe repository or conversation store) failed.
  #[error("storage failure: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
