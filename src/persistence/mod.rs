//! Persistence layer: the SQLite-backed album table gateway.
//!
//! [`sqlite::SqliteAlbumStore`] owns all read/write access to the `albums`
//! table through an `sqlx::SqlitePool`. The schema is created on connect,
//! so a fresh database file is usable immediately.

pub mod models;
pub mod sqlite;
