//! Database row models for the albums table.

use serde::{Deserialize, Serialize};

use crate::domain::{Album, AlbumId};

/// A stored album row from the `albums` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRow {
    /// Auto-increment row ID.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Self {
            id: AlbumId::new(row.id),
            title: row.title,
            artist: row.artist,
        }
    }
}
