//! Domain layer: album records, drafts, and identifiers.
//!
//! The domain model is deliberately small: an [`Album`] is a persisted
//! record with a storage-assigned [`AlbumId`], and an [`AlbumDraft`] holds
//! the mutable attributes before a record has an identifier.

pub mod album;
pub mod album_id;

pub use album::{Album, AlbumDraft, MAX_FIELD_CHARS};
pub use album_id::AlbumId;
