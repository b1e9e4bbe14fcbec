//! Contact types — the rows of the address book.
//!
//! A contact is a flat record: an immutable store-assigned id plus six
//! free-text fields, one of which is a favourite marker. On disk the marker
//! is a single character (see [`Favourite`]); in memory it is a `bool`.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Row id assigned by the store on insert. Never reused after deletion.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl fmt::Display for ContactId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

// ─── Favourite flag ──────────────────────────────────────────────────────────

/// Codec for the single-character favourite column.
///
/// `"*"` marks a favourite and `" "` a regular contact. Anything else read
/// back from the database (empty string, NULL) is treated as not-favourite.
pub struct Favourite;

impl Favourite {
  pub const FLAG:  &'static str = "*";
  pub const CLEAR: &'static str = " ";

  pub fn encode(favourite: bool) -> &'static str {
    if favourite { Self::FLAG } else { Self::CLEAR }
  }

  pub fn decode(flag: Option<&str>) -> bool { flag == Some(Self::FLAG) }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// Every field of a contact except its id.
///
/// This is what callers hand to `create`/`update` and what `fetch_one`
/// returns alongside the id. Optional fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
  pub name:      String,
  pub email:     String,
  pub favourite: bool,
  pub phone:     String,
  pub street:    String,
  pub city:      String,
}

impl ContactFields {
  /// Caller-side check run before a contact is saved. The store itself
  /// accepts any fields.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.name.trim().is_empty() {
      return Err(ValidationError::EmptyName);
    }
    Ok(())
  }
}

/// A full row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:     ContactId,
  #[serde(flatten)]
  pub fields: ContactFields,
}

/// The slice of a contact shown in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummary {
  pub id:        ContactId,
  pub name:      String,
  pub favourite: bool,
}

impl ContactSummary {
  /// Order used by the contact list.
  ///
  /// Non-favourites come first, then favourites; ties are broken by id. This
  /// matches an ascending text sort on the stored flag, where `" "` (0x20)
  /// sorts before `"*"` (0x2A).
  pub fn list_order(a: &Self, b: &Self) -> Ordering {
    a.favourite
      .cmp(&b.favourite)
      .then_with(|| a.id.cmp(&b.id))
  }
}
