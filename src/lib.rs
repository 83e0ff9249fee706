//! # album-catalog
//!
//! REST service for managing a music album catalog backed by SQLite.
//!
//! This crate exposes CRUD endpoints over a single `albums` table. All
//! persistence goes through a thin table gateway; the service layer owns
//! input normalization and validation, and handlers only translate
//! between HTTP and the service.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AlbumService (service/)
//!     │
//!     ├── Album, AlbumDraft (domain/)
//!     │
//!     └── SQLite Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
