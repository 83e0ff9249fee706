//! SQLite implementation of the album table gateway.

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use super::models::AlbumRow;
use crate::config::CatalogConfig;
use crate::domain::{Album, AlbumDraft, AlbumId};
use crate::error::CatalogError;

/// SQLite-backed album store using `sqlx::SqlitePool`.
///
/// All query failures surface as [`CatalogError::Storage`]; "no such
/// record" is distinguished as [`CatalogError::AlbumNotFound`].
#[derive(Debug, Clone)]
pub struct SqliteAlbumStore {
    pool: SqlitePool,
}

impl SqliteAlbumStore {
    /// Creates a store over an existing connection pool.
    ///
    /// The schema must already exist; [`SqliteAlbumStore::connect`] handles
    /// both steps for the normal startup path.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database named by the configuration and prepares it for
    /// use: builds the connection pool, switches to WAL journaling, and
    /// creates the `albums` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::Storage`] if the database cannot be
    /// opened or the schema cannot be created.
    pub async fn connect(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        init_schema(&pool).await?;

        Ok(Self::new(pool))
    }

    /// Returns every album, ordered by storage key ascending.
    ///
    /// The order is stable across calls: identifiers are assigned
    /// monotonically on insert, so this is insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::Storage`] on database failure.
    pub async fn fetch_all(&self) -> Result<Vec<Album>, CatalogError> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, title, artist FROM albums ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::Storage(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, title, artist)| AlbumRow { id, title, artist }.into())
            .collect())
    }

    /// Loads a single album by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlbumNotFound`] if no such record exists,
    /// or a [`CatalogError::Storage`] on database failure.
    pub async fn find(&self, id: AlbumId) -> Result<Album, CatalogError> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, title, artist FROM albums WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::Storage(e.to_string()))?;

        row.map(|(id, title, artist)| AlbumRow { id, title, artist }.into())
            .ok_or(CatalogError::AlbumNotFound(id))
    }

    /// Inserts a new album and returns it with its storage-assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::Storage`] on database failure.
    pub async fn insert(&self, draft: &AlbumDraft) -> Result<Album, CatalogError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO albums (title, artist) VALUES (?, ?) RETURNING id",
        )
        .bind(&draft.title)
        .bind(&draft.artist)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogError::Storage(e.to_string()))?;

        Ok(Album {
            id: AlbumId::new(id),
            title: draft.title.clone(),
            artist: draft.artist.clone(),
        })
    }

    /// Overwrites the title and artist of an existing album.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlbumNotFound`] if no such record exists,
    /// or a [`CatalogError::Storage`] on database failure.
    pub async fn update(&self, id: AlbumId, draft: &AlbumDraft) -> Result<Album, CatalogError> {
        let result = sqlx::query("UPDATE albums SET title = ?, artist = ? WHERE id = ?")
            .bind(&draft.title)
            .bind(&draft.artist)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::AlbumNotFound(id));
        }

        Ok(Album {
            id,
            title: draft.title.clone(),
            artist: draft.artist.clone(),
        })
    }

    /// Deletes an album by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlbumNotFound`] if no such record exists,
    /// or a [`CatalogError::Storage`] on database failure.
    pub async fn delete(&self, id: AlbumId) -> Result<(), CatalogError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::AlbumNotFound(id));
        }

        Ok(())
    }
}

/// Creates the albums table and its indexes (idempotent).
async fn init_schema(pool: &SqlitePool) -> Result<(), CatalogError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS albums (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            title  TEXT NOT NULL,
            artist TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| CatalogError::Storage(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_albums_title ON albums(title)")
        .execute(pool)
        .await
        .map_err(|e| CatalogError::Storage(e.to_string()))?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_albums_artist ON albums(artist)")
        .execute(pool)
        .await
        .map_err(|e| CatalogError::Storage(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    fn memory_config() -> CatalogConfig {
        CatalogConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_url: "sqlite::memory:".to_string(),
            // A single connection keeps every query on the same in-memory
            // database.
            database_max_connections: 1,
            database_min_connections: 1,
            database_connect_timeout_secs: 5,
        }
    }

    async fn memory_store() -> SqliteAlbumStore {
        let Ok(store) = SqliteAlbumStore::connect(&memory_config()).await else {
            panic!("in-memory store should connect");
        };
        store
    }

    #[tokio::test]
    async fn fetch_all_on_empty_store_returns_empty() {
        let store = memory_store().await;
        let Ok(albums) = store.fetch_all().await else {
            panic!("fetch_all failed");
        };
        assert!(albums.is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_distinct_increasing_ids() {
        let store = memory_store().await;
        let Ok(first) = store.insert(&AlbumDraft::new("A", "X")).await else {
            panic!("insert failed");
        };
        let Ok(second) = store.insert(&AlbumDraft::new("B", "Y")).await else {
            panic!("insert failed");
        };
        assert_ne!(first.id, second.id);
        assert!(first.id < second.id);
    }

    #[tokio::test]
    async fn fetch_all_returns_insertion_order() {
        let store = memory_store().await;
        let _ = store.insert(&AlbumDraft::new("A", "X")).await;
        let _ = store.insert(&AlbumDraft::new("B", "Y")).await;

        let Ok(albums) = store.fetch_all().await else {
            panic!("fetch_all failed");
        };
        assert_eq!(albums.len(), 2);
        assert_eq!(albums.first().map(|a| a.title.as_str()), Some("A"));
        assert_eq!(albums.first().map(|a| a.artist.as_str()), Some("X"));
        assert_eq!(albums.last().map(|a| a.title.as_str()), Some("B"));
        assert_eq!(albums.last().map(|a| a.artist.as_str()), Some("Y"));
    }

    #[tokio::test]
    async fn find_missing_returns_not_found() {
        let store = memory_store().await;
        let result = store.find(AlbumId::new(999)).await;
        assert!(matches!(result, Err(CatalogError::AlbumNotFound(_))));
    }

    #[tokio::test]
    async fn find_returns_inserted_record() {
        let store = memory_store().await;
        let Ok(created) = store.insert(&AlbumDraft::new("Kind of Blue", "Miles Davis")).await
        else {
            panic!("insert failed");
        };

        let Ok(found) = store.find(created.id).await else {
            panic!("find failed");
        };
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn update_persists_changes() {
        let store = memory_store().await;
        let Ok(created) = store.insert(&AlbumDraft::new("Kind of Blue", "Miles")).await else {
            panic!("insert failed");
        };

        let updated = store
            .update(created.id, &AlbumDraft::new("Kind of Blue", "Miles Davis"))
            .await;
        let Ok(updated) = updated else {
            panic!("update failed");
        };
        assert_eq!(updated.artist, "Miles Davis");

        let Ok(found) = store.find(created.id).await else {
            panic!("find failed");
        };
        assert_eq!(found.artist, "Miles Davis");
    }

    #[tokio::test]
    async fn update_missing_returns_not_found() {
        let store = memory_store().await;
        let result = store
            .update(AlbumId::new(999), &AlbumDraft::new("T", "A"))
            .await;
        assert!(matches!(result, Err(CatalogError::AlbumNotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = memory_store().await;
        let Ok(created) = store.insert(&AlbumDraft::new("T", "A")).await else {
            panic!("insert failed");
        };

        let deleted = store.delete(created.id).await;
        assert!(deleted.is_ok());

        let result = store.find(created.id).await;
        assert!(matches!(result, Err(CatalogError::AlbumNotFound(_))));
    }

    #[tokio::test]
    async fn delete_missing_returns_not_found() {
        let store = memory_store().await;
        let result = store.delete(AlbumId::new(999)).await;
        assert!(matches!(result, Err(CatalogError::AlbumNotFound(_))));
    }
}
