//! Album service: orchestrates catalog operations against the store.

use crate::domain::{Album, AlbumDraft, AlbumId};
use crate::error::CatalogError;
use crate::persistence::sqlite::SqliteAlbumStore;

/// Orchestration layer for all album operations.
///
/// Stateless coordinator over [`SqliteAlbumStore`]. Every write method
/// follows the pattern: normalize input → validate → hit the store →
/// log the mutation → return the result.
#[derive(Debug, Clone)]
pub struct AlbumService {
    store: SqliteAlbumStore,
}

impl AlbumService {
    /// Creates a new `AlbumService`.
    #[must_use]
    pub fn new(store: SqliteAlbumStore) -> Self {
        Self { store }
    }

    /// Returns every album in the catalog, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError::Storage`] on database failure.
    pub async fn list(&self) -> Result<Vec<Album>, CatalogError> {
        self.store.fetch_all().await
    }

    /// Returns a single album by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlbumNotFound`] if no such album exists,
    /// or a [`CatalogError::Storage`] on database failure.
    pub async fn get(&self, id: AlbumId) -> Result<Album, CatalogError> {
        self.store.find(id).await
    }

    /// Adds a new album to the catalog and returns it with its assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the draft fails the field
    /// rules, or a [`CatalogError::Storage`] on database failure.
    pub async fn create(&self, draft: AlbumDraft) -> Result<Album, CatalogError> {
        let draft = draft.normalized();
        draft.validate()?;

        let album = self.store.insert(&draft).await?;

        tracing::info!(id = %album.id, title = %album.title, "album created");
        Ok(album)
    }

    /// Replaces the title and artist of an existing album.
    ///
    /// Validation runs before the store is touched, so a malformed draft
    /// is rejected even when the identifier does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if the draft fails the field
    /// rules, [`CatalogError::AlbumNotFound`] if no such album exists, or
    /// a [`CatalogError::Storage`] on database failure.
    pub async fn update(&self, id: AlbumId, draft: AlbumDraft) -> Result<Album, CatalogError> {
        let draft = draft.normalized();
        draft.validate()?;

        let album = self.store.update(id, &draft).await?;

        tracing::info!(%id, title = %album.title, "album updated");
        Ok(album)
    }

    /// Removes an album from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlbumNotFound`] if no such album exists,
    /// or a [`CatalogError::Storage`] on database failure.
    pub async fn remove(&self, id: AlbumId) -> Result<(), CatalogError> {
        self.store.delete(id).await?;

        tracing::info!(%id, "album removed");
        Ok(())
    }
}
