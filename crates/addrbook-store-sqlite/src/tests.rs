//! Integration tests for `SqliteStore` against a database in a temp dir.

use addrbook_core::{ContactFields, ContactId, ContactStore};
use tempfile::TempDir;

use crate::{
  schema::{self, SchemaInit},
  Error, SqliteStore, SCHEMA_VERSION,
};

async fn store() -> (TempDir, SqliteStore) {
  let dir = tempfile::tempdir().expect("temp dir");
  let store = SqliteStore::open(dir.path().join("contacts.db"))
    .await
    .expect("open store");
  (dir, store)
}

fn fields(name: &str, favourite: bool) -> ContactFields {
  ContactFields {
    name: name.into(),
    favourite,
    ..ContactFields::default()
  }
}

fn alice() -> ContactFields {
  ContactFields {
    name:      "Alice".into(),
    email:     "a@x.com".into(),
    favourite: true,
    phone:     "555".into(),
    street:    "Main St".into(),
    city:      "Springfield".into(),
  }
}

fn user_version(path: &std::path::Path) -> i64 {
  let conn = rusqlite::Connection::open(path).unwrap();
  conn
    .pragma_query_value(None, "user_version", |row| row.get(0))
    .unwrap()
}

// ─── CRUD ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn alice_lifecycle() {
  let (_dir, s) = store().await;

  let id = s.create(alice()).await.unwrap();
  assert_eq!(id, ContactId(1));

  let list = s.fetch_all().await.unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0].id, id);
  assert_eq!(list[0].name, "Alice");
  assert!(list[0].favourite);

  let mut renamed = alice();
  renamed.name = "Alicia".into();
  s.update(id, renamed).await.unwrap();
  assert_eq!(s.fetch_one(id).await.unwrap().fields.name, "Alicia");

  s.delete(id).await.unwrap();
  assert!(s.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_fetch_one_roundtrips_every_field() {
  let (_dir, s) = store().await;

  let input = ContactFields {
    name:      "Bob O'Neil".into(),
    email:     "".into(),
    favourite: false,
    phone:     "+61 3 9905 0000".into(),
    street:    "Wellington Rd".into(),
    city:      "Clayton".into(),
  };
  let id = s.create(input.clone()).await.unwrap();

  let contact = s.fetch_one(id).await.unwrap();
  assert_eq!(contact.id, id);
  assert_eq!(contact.fields, input);
}

#[tokio::test]
async fn store_does_not_validate_names() {
  let (_dir, s) = store().await;
  let id = s.create(ContactFields::default()).await.unwrap();
  assert_eq!(s.fetch_one(id).await.unwrap().fields.name, "");
}

#[tokio::test]
async fn update_overwrites_all_fields_and_is_idempotent() {
  let (_dir, s) = store().await;
  let id = s.create(alice()).await.unwrap();

  let replacement = ContactFields {
    name:      "Carol".into(),
    email:     "carol@example.com".into(),
    favourite: false,
    phone:     "".into(),
    street:    "".into(),
    city:      "Melbourne".into(),
  };
  s.update(id, replacement.clone()).await.unwrap();
  s.update(id, replacement.clone()).await.unwrap();

  assert_eq!(s.fetch_one(id).await.unwrap().fields, replacement);
  assert_eq!(s.fetch_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_missing_id_is_a_noop() {
  let (_dir, s) = store().await;
  let id = s.create(alice()).await.unwrap();

  s.update(ContactId(99), fields("Ghost", false)).await.unwrap();

  let list = s.fetch_all().await.unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0].id, id);
  assert_eq!(s.fetch_one(id).await.unwrap().fields, alice());
}

#[tokio::test]
async fn delete_removes_contact() {
  let (_dir, s) = store().await;
  let keep = s.create(fields("Keep", false)).await.unwrap();
  let gone = s.create(fields("Gone", false)).await.unwrap();

  s.delete(gone).await.unwrap();

  let err = s.fetch_one(gone).await.unwrap_err();
  assert!(err.is_not_found());
  assert!(s.fetch_one(keep).await.is_ok());
}

#[tokio::test]
async fn delete_missing_id_is_a_noop() {
  let (_dir, s) = store().await;
  s.create(alice()).await.unwrap();

  s.delete(ContactId(42)).await.unwrap();
  assert_eq!(s.fetch_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn fetch_one_missing_is_not_found() {
  let (_dir, s) = store().await;

  let err = s.fetch_one(ContactId(7)).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(addrbook_core::Error::NotFound(ContactId(7)))
  ));
  assert_eq!(err.to_string(), "core error: contact not found: 7");
}

// ─── Ordering and ids ────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_all_lists_non_favourites_first() {
  let (_dir, s) = store().await;
  for (name, favourite) in [("A", false), ("B", true), ("C", false), ("D", true)] {
    s.create(fields(name, favourite)).await.unwrap();
  }

  let list = s.fetch_all().await.unwrap();
  let flags: Vec<bool> = list.iter().map(|c| c.favourite).collect();
  assert_eq!(flags, [false, false, true, true]);

  let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["A", "C", "B", "D"]);
}

#[tokio::test]
async fn ids_are_never_reused() {
  let (_dir, s) = store().await;

  let first = s.create(fields("one", false)).await.unwrap();
  let second = s.create(fields("two", false)).await.unwrap();
  s.delete(second).await.unwrap();
  let third = s.create(fields("three", false)).await.unwrap();
  s.delete(first).await.unwrap();
  s.delete(third).await.unwrap();
  let fourth = s.create(fields("four", false)).await.unwrap();

  let ids = [first, second, third, fourth];
  for (i, a) in ids.iter().enumerate() {
    for b in &ids[i + 1..] {
      assert_ne!(a, b);
    }
  }
  assert_eq!(fourth, ContactId(4));
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
  let (_dir, s) = store().await;

  let (a, b, c, d) = tokio::join!(
    s.create(fields("a", false)),
    s.create(fields("b", true)),
    s.create(fields("c", false)),
    s.create(fields("d", true)),
  );
  let mut ids = vec![a.unwrap(), b.unwrap(), c.unwrap(), d.unwrap()];
  ids.sort();
  ids.dedup();

  assert_eq!(ids.len(), 4);
  assert_eq!(s.fetch_all().await.unwrap().len(), 4);
}

// ─── Lifecycle and schema ────────────────────────────────────────────────────

#[tokio::test]
async fn contacts_survive_reopening() {
  let (dir, s) = store().await;
  let id = s.create(alice()).await.unwrap();
  s.close();

  let reopened = SqliteStore::open(dir.path().join("contacts.db"))
    .await
    .unwrap();
  assert_eq!(reopened.fetch_one(id).await.unwrap().fields, alice());
}

#[tokio::test]
async fn open_records_schema_version() {
  let (_dir, s) = store().await;
  assert_eq!(user_version(s.path()), SCHEMA_VERSION);

  // Reopening an up-to-date file changes nothing.
  let again = SqliteStore::open(s.path()).await.unwrap();
  assert_eq!(user_version(again.path()), SCHEMA_VERSION);
}

#[tokio::test]
async fn open_rejects_newer_schema() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("future.db");
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.pragma_update(None, "user_version", 7).unwrap();
  }

  let err = SqliteStore::open(&path).await.unwrap_err();
  assert!(matches!(
    err,
    Error::UnsupportedVersion { found: 7, supported: SCHEMA_VERSION }
  ));
}

#[tokio::test]
async fn open_fails_for_unreachable_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing").join("contacts.db");

  let err = SqliteStore::open(&path).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(!err.is_not_found());
}

#[test]
fn initialise_runs_upgrade_hook_for_older_files() {
  let dir = tempfile::tempdir().unwrap();
  let mut conn = rusqlite::Connection::open(dir.path().join("old.db")).unwrap();

  assert_eq!(schema::initialise(&mut conn, 1).unwrap(), SchemaInit::Created);
  assert_eq!(schema::initialise(&mut conn, 1).unwrap(), SchemaInit::Current);
  assert_eq!(
    schema::initialise(&mut conn, 2).unwrap(),
    SchemaInit::Upgraded { from: 1, to: 2 }
  );
  assert_eq!(
    schema::initialise(&mut conn, 1).unwrap(),
    SchemaInit::TooNew { found: 2 }
  );

  let version: i64 = conn
    .pragma_query_value(None, "user_version", |row| row.get(0))
    .unwrap();
  assert_eq!(version, 2);
}

#[tokio::test]
async fn reads_rows_with_null_columns_and_text_flags() {
  let (_dir, s) = store().await;
  {
    let conn = rusqlite::Connection::open(s.path()).unwrap();
    conn
      .execute_batch(
        "INSERT INTO contacts (name, favourite) VALUES ('Dora', '*');
         INSERT INTO contacts (name, favourite) VALUES ('Eve', NULL);
         INSERT INTO contacts (name, favourite, city) VALUES ('Finn', ' ', 'Perth');",
      )
      .unwrap();
  }

  let list = s.fetch_all().await.unwrap();
  let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Eve", "Finn", "Dora"]);

  let dora = s.fetch_one(list[2].id).await.unwrap();
  assert!(dora.fields.favourite);
  assert_eq!(dora.fields.email, "");
  assert_eq!(dora.fields.city, "");
}
