//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use addrbook_core::{Contact, ContactFields, ContactId, ContactStore, ContactSummary};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{encode_favourite, RawContact, RawSummary, CONTACT_COLUMNS, SUMMARY_COLUMNS},
  schema::{self, SchemaInit, SCHEMA_VERSION},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book backed by a single SQLite file.
///
/// The handle holds only the file path. Each operation opens a connection,
/// runs one statement and closes the connection again, so a handle can be
/// cloned freely and kept across any number of calls.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  path: Arc<PathBuf>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and bring its schema up to date.
  ///
  /// Fails if the file cannot be opened or was written by a newer schema
  /// version.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self { path: Arc::new(path.as_ref().to_path_buf()) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Release the store. Connections are never held between calls, so this
  /// only ends the handle's life explicitly.
  pub fn close(self) {
    tracing::debug!(path = %self.path.display(), "store closed");
  }

  pub fn path(&self) -> &Path { &self.path }

  async fn init_schema(&self) -> Result<()> {
    let outcome = self
      .with_connection(|conn| Ok(schema::initialise(conn, SCHEMA_VERSION)?))
      .await?;

    match outcome {
      SchemaInit::Created => {
        tracing::info!(path = %self.path.display(), version = SCHEMA_VERSION, "created contacts schema");
      }
      SchemaInit::Upgraded { from, to } => {
        tracing::info!(path = %self.path.display(), from, to, "upgraded contacts schema");
      }
      SchemaInit::Current => {}
      SchemaInit::TooNew { found } => {
        return Err(Error::UnsupportedVersion { found, supported: SCHEMA_VERSION });
      }
    }
    Ok(())
  }

  /// Run `f` on a freshly opened connection and close it afterwards.
  ///
  /// The connection is closed whether or not `f` succeeded; an error from `f`
  /// takes precedence over an error from closing.
  async fn with_connection<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
  {
    let conn = tokio_rusqlite::Connection::open(self.path.as_path()).await?;
    let outcome = conn.call(f).await;
    let closed = conn.close().await;

    let value = outcome?;
    closed?;
    Ok(value)
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn create(&self, fields: ContactFields) -> Result<ContactId> {
    let id = self
      .with_connection(move |conn| {
        conn.execute(
          "INSERT INTO contacts (name, email, favourite, phone, street, city)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            fields.name,
            fields.email,
            encode_favourite(fields.favourite),
            fields.phone,
            fields.street,
            fields.city,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    let id = ContactId(id);
    tracing::debug!(contact_id = %id, "created contact");
    Ok(id)
  }

  async fn update(&self, id: ContactId, fields: ContactFields) -> Result<()> {
    let affected = self
      .with_connection(move |conn| {
        Ok(conn.execute(
          "UPDATE contacts
           SET name = ?2, email = ?3, favourite = ?4, phone = ?5, street = ?6, city = ?7
           WHERE _id = ?1",
          rusqlite::params![
            id.0,
            fields.name,
            fields.email,
            encode_favourite(fields.favourite),
            fields.phone,
            fields.street,
            fields.city,
          ],
        )?)
      })
      .await?;

    tracing::debug!(contact_id = %id, affected, "updated contact");
    Ok(())
  }

  async fn delete(&self, id: ContactId) -> Result<()> {
    let affected = self
      .with_connection(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE _id = ?1", rusqlite::params![id.0])?)
      })
      .await?;

    tracing::debug!(contact_id = %id, affected, "deleted contact");
    Ok(())
  }

  async fn fetch_all(&self) -> Result<Vec<ContactSummary>> {
    let raws: Vec<RawSummary> = self
      .with_connection(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {SUMMARY_COLUMNS} FROM contacts"))?;
        let rows = stmt
          .query_map([], RawSummary::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut summaries: Vec<ContactSummary> =
      raws.into_iter().map(RawSummary::into_summary).collect();
    summaries.sort_by(ContactSummary::list_order);

    tracing::debug!(count = summaries.len(), "fetched contact list");
    Ok(summaries)
  }

  async fn fetch_one(&self, id: ContactId) -> Result<Contact> {
    let raw: Option<RawContact> = self
      .with_connection(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE _id = ?1"),
              rusqlite::params![id.0],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    match raw {
      Some(raw) => Ok(raw.into_contact()),
      None => {
        tracing::debug!(contact_id = %id, "contact not found");
        Err(addrbook_core::Error::NotFound(id).into())
      }
    }
  }
}
