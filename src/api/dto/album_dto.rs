//! Album DTOs for create, update, get, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::{Album, AlbumId};

/// Request body for `POST /albums`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlbumRequest {
    /// Album title (1 to 100 characters after trimming).
    pub title: String,
    /// Performing artist (1 to 100 characters after trimming).
    pub artist: String,
}

/// Request body for `PUT /albums/{id}`.
///
/// Both fields are required; the stored record is replaced wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAlbumRequest {
    /// New album title.
    pub title: String,
    /// New performing artist.
    pub artist: String,
}

/// Single album as returned by every read and write endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlbumDto {
    /// Storage-assigned identifier.
    pub id: AlbumId,
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

impl From<Album> for AlbumDto {
    fn from(album: Album) -> Self {
        Self {
            id: album.id,
            title: album.title,
            artist: album.artist,
        }
    }
}

/// Paginated list response for `GET /albums`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AlbumListResponse {
    /// Albums on the requested page, ordered by identifier.
    pub albums: Vec<AlbumDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
