//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `addrbook-store-sqlite`).
//! The TUI depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactFields, ContactId, ContactSummary};

/// Abstraction over an address-book backend.
///
/// Every call is self-contained: a backend acquires whatever resources it
/// needs, performs a single statement and releases them before the future
/// resolves. There are no transactions spanning several calls, and concurrent
/// writers to the same row are resolved by the backend (last write wins).
///
/// Fields are stored as given. Rejecting an empty name is the caller's job
/// (see [`ContactFields::validate`]).
///
/// All methods return `Send` futures so callers can drive them from a
/// multi-threaded runtime without blocking their own event loop.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new contact and return the id the store assigned to it.
  fn create(
    &self,
    fields: ContactFields,
  ) -> impl Future<Output = Result<ContactId, Self::Error>> + Send + '_;

  /// Overwrite all six fields of contact `id`.
  ///
  /// Updating an id that does not exist affects no rows and is not an error.
  fn update(
    &self,
    id: ContactId,
    fields: ContactFields,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Permanently remove contact `id`. Deleting a missing id is a no-op.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// List every contact as a [`ContactSummary`], sorted by
  /// [`ContactSummary::list_order`].
  fn fetch_all(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactSummary>, Self::Error>> + Send + '_;

  /// Fetch every field of contact `id`.
  ///
  /// A missing id is an error ([`crate::Error::NotFound`]), never a default
  /// record.
  fn fetch_one(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;
}
