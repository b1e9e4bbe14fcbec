//! Error type for `addrbook-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] addrbook_core::Error),

  /// The database could not be opened, read or written.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("database schema version {found} is newer than supported version {supported}")]
  UnsupportedVersion { found: i64, supported: i64 },
}

impl Error {
  /// `true` when the error means "no such contact" rather than a storage
  /// failure.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Core(addrbook_core::Error::NotFound(_)))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
