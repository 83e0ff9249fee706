//! Service layer: orchestration between the HTTP API and the store.
//!
//! [`AlbumService`] owns the input-cleanup and validation rules; the
//! persistence layer below it only ever sees data that already passed
//! them.

pub mod album_service;

pub use album_service::AlbumService;
