//! Core types and trait definitions for the address book.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! The SQLite backend and the TUI both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod error;
pub mod store;

pub use contact::{Contact, ContactFields, ContactId, ContactSummary, Favourite};
pub use error::{Error, Result, ValidationError};
pub use store::ContactStore;
