//! Conversion between SQLite rows and the domain types in `addrbook-core`.
//!
//! Text columns are nullable on disk; NULL reads back as an empty string.
//! The favourite column holds the single-character flag described on
//! [`Favourite`].

use addrbook_core::{Contact, ContactFields, ContactId, ContactSummary, Favourite};

/// Every column, in the order used by [`RawContact::from_row`].
pub const CONTACT_COLUMNS: &str = "_id, name, email, favourite, phone, street, city";

/// Columns read by the list view, in the order used by
/// [`RawSummary::from_row`].
pub const SUMMARY_COLUMNS: &str = "_id, name, favourite";

pub fn encode_favourite(favourite: bool) -> &'static str { Favourite::encode(favourite) }

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// A `contacts` row exactly as SQLite hands it back.
pub struct RawContact {
  pub id:        i64,
  pub name:      Option<String>,
  pub email:     Option<String>,
  pub favourite: Option<String>,
  pub phone:     Option<String>,
  pub street:    Option<String>,
  pub city:      Option<String>,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      name:      row.get(1)?,
      email:     row.get(2)?,
      favourite: row.get(3)?,
      phone:     row.get(4)?,
      street:    row.get(5)?,
      city:      row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Contact {
    Contact {
      id:     ContactId(self.id),
      fields: ContactFields {
        name:      self.name.unwrap_or_default(),
        email:     self.email.unwrap_or_default(),
        favourite: Favourite::decode(self.favourite.as_deref()),
        phone:     self.phone.unwrap_or_default(),
        street:    self.street.unwrap_or_default(),
        city:      self.city.unwrap_or_default(),
      },
    }
  }
}

pub struct RawSummary {
  pub id:        i64,
  pub name:      Option<String>,
  pub favourite: Option<String>,
}

impl RawSummary {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:        row.get(0)?,
      name:      row.get(1)?,
      favourite: row.get(2)?,
    })
  }

  pub fn into_summary(self) -> ContactSummary {
    ContactSummary {
      id:        ContactId(self.id),
      name:      self.name.unwrap_or_default(),
      favourite: Favourite::decode(self.favourite.as_deref()),
    }
  }
}
