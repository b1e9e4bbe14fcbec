//! SQL schema for the address-book SQLite store.
//!
//! The schema version lives in `PRAGMA user_version`. A fresh file is created
//! at [`SCHEMA_VERSION`]; an older file goes through [`upgrade`], which has no
//! migrations to run yet.

use rusqlite::{Connection, Transaction};

/// Version written to `PRAGMA user_version` by this build.
pub const SCHEMA_VERSION: i64 = 1;

/// Connection-level settings; must run outside a transaction.
pub const PRAGMAS: &str = "PRAGMA journal_mode = WAL;";

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The key column is `_id`, the name Android cursor adapters expect, so a
/// `UserContacts` file copied off a phone opens as is.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    _id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT,
    email      TEXT,
    favourite  TEXT,   -- '*' favourite, ' ' otherwise
    phone      TEXT,
    street     TEXT,
    city       TEXT
);
";

/// What [`initialise`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaInit {
  /// Empty database; tables created at the target version.
  Created,
  /// Older version found; upgrade hook ran.
  Upgraded { from: i64, to: i64 },
  /// Already at the target version; nothing done.
  Current,
  /// Written by a newer build. Left untouched.
  TooNew { found: i64 },
}

/// Bring the database on `conn` to schema version `target`.
pub fn initialise(conn: &mut Connection, target: i64) -> rusqlite::Result<SchemaInit> {
  conn.execute_batch(PRAGMAS)?;

  let found: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

  if found == target {
    return Ok(SchemaInit::Current);
  }
  if found > target {
    return Ok(SchemaInit::TooNew { found });
  }

  let tx = conn.transaction()?;
  let outcome = if found == 0 {
    tx.execute_batch(SCHEMA)?;
    SchemaInit::Created
  } else {
    upgrade(&tx, found, target)?;
    SchemaInit::Upgraded { from: found, to: target }
  };
  tx.pragma_update(None, "user_version", target)?;
  tx.commit()?;

  Ok(outcome)
}

/// Migrate the schema from version `from` to `to`.
///
/// Runs inside the transaction that records the new version. No version
/// after 1 changes the table layout, so there is nothing to do yet.
fn upgrade(_tx: &Transaction<'_>, from: i64, to: i64) -> rusqlite::Result<()> {
  tracing::debug!(from, to, "no schema migrations to apply");
  Ok(())
}
