// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Durable storage for clubs, stadiums, and matches, backed by `SQLite`
//! through Diesel.
//!
//! The only public entry point is [`SqliteStore`]. Callers construct one
//! against a file path (or an in-memory database for tests) and go through
//! its methods for every read and write. Rows are converted into the domain
//! structures from `matchday-domain` at the store boundary, so nothing
//! Diesel-specific leaks out of this crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::all,
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

use diesel::prelude::*;

mod error;
mod filters;
mod models;
mod schema;
mod sqlite;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use filters::{
    ClubFilter, ClubSort, ClubSortField, MatchFilter, PageRequest, PageResult, SortDirection,
};

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A `SQLite`-backed store holding the league's clubs, stadiums, and
/// matches.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store backed by a uniquely named in-memory database.
    ///
    /// Each call gets its own database, so concurrently running tests do
    /// not observe each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");
        let conn: SqliteConnection = sqlite::initialize_database(&database_url)?;
        Ok(Self { conn })
    }

    /// Creates a store backed by the `SQLite` database file at `path`,
    /// creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        let conn: SqliteConnection = sqlite::initialize_database(path)?;
        Ok(Self { conn })
    }
}
