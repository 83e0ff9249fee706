//! Album record and its pre-persistence draft form.

use serde::Serialize;

use super::AlbumId;
use crate::error::CatalogError;

/// Maximum length, in characters, of the title and artist fields.
pub const MAX_FIELD_CHARS: usize = 100;

/// A persisted album record.
///
/// The identifier is assigned by storage on insert; every `Album` value
/// therefore corresponds to a row that exists (or existed) in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    /// Storage-assigned identifier (immutable after insert).
    pub id: AlbumId,
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

/// Mutable album attributes before an identifier exists.
///
/// Inputs to insert and update operations. Drafts are normalized and
/// validated by the service layer before they reach storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDraft {
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

impl AlbumDraft {
    /// Creates a draft from raw title and artist values.
    #[must_use]
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Returns the draft with surrounding whitespace stripped from both
    /// fields.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            artist: self.artist.trim().to_string(),
        }
    }

    /// Checks the draft against the record invariants: both fields
    /// non-empty and at most [`MAX_FIELD_CHARS`] characters.
    ///
    /// Call after [`AlbumDraft::normalized`], otherwise whitespace-only
    /// values pass the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_field("title", &self.title)?;
        validate_field("artist", &self.artist)?;
        Ok(())
    }
}

fn validate_field(name: &str, value: &str) -> Result<(), CatalogError> {
    if value.is_empty() {
        return Err(CatalogError::Validation(format!("{name} must not be empty")));
    }
    let chars = value.chars().count();
    if chars > MAX_FIELD_CHARS {
        return Err(CatalogError::Validation(format!(
            "{name} must be at most {MAX_FIELD_CHARS} characters, got {chars}"
        )));
    }
    Ok(())
}
