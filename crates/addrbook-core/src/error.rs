//! Error types for `addrbook-core`.

use thiserror::Error;

use crate::contact::ContactId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found: {0}")]
  NotFound(ContactId),

  #[error("invalid contact: {0}")]
  Validation(#[from] ValidationError),
}

/// Caller-side rejection of a contact before it is handed to a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("you must enter a contact name")]
  EmptyName,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
