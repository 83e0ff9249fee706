//! Data Transfer Objects for REST request/response serialization.

pub mod album_dto;
pub mod common_dto;

pub use album_dto::*;
pub use common_dto::*;
