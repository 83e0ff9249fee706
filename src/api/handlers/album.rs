//! Album CRUD handlers: create, list, get, update, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AlbumDto, AlbumListResponse, CreateAlbumRequest, PaginationMeta, PaginationParams,
    UpdateAlbumRequest,
};
use crate::app_state::AppState;
use crate::domain::AlbumDraft;
use crate::error::{CatalogError, ErrorResponse};

/// `POST /albums` — Add a new album to the catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] if the submitted fields fail
/// validation.
#[utoipa::path(
    post,
    path = "/api/v1/albums",
    tag = "Albums",
    summary = "Add an album",
    description = "Validates the submitted title and artist and stores a new album. The identifier is assigned by storage and returned in the response.",
    request_body = CreateAlbumRequest,
    responses(
        (status = 201, description = "Album created", body = AlbumDto),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn create_album(
    State(state): State<AppState>,
    Json(req): Json<CreateAlbumRequest>,
) -> Result<impl IntoResponse, CatalogError> {
    let album = state
        .album_service
        .create(AlbumDraft::new(req.title, req.artist))
        .await?;

    Ok((StatusCode::CREATED, Json(AlbumDto::from(album))))
}

/// `GET /albums` — List all albums with pagination.
///
/// # Errors
///
/// Returns [`CatalogError::Storage`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/albums",
    tag = "Albums",
    summary = "List albums",
    description = "Returns a paginated list of all albums, ordered by identifier ascending (insertion order).",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated album list", body = AlbumListResponse),
    )
)]
pub async fn list_albums(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, CatalogError> {
    let params = params.clamped();
    let albums = state.album_service.list().await?;

    let total = albums.len() as u32;
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    // The page offset can exceed u32.
    let start = usize::try_from(u64::from(page - 1) * u64::from(per_page))
        .unwrap_or(usize::MAX);
    let albums: Vec<AlbumDto> = albums
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .map(AlbumDto::from)
        .collect();

    Ok(Json(AlbumListResponse {
        albums,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }))
}

/// `GET /albums/:id` — Get a single album.
///
/// # Errors
///
/// Returns [`CatalogError::AlbumNotFound`] if the album does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/albums/{id}",
    tag = "Albums",
    summary = "Get an album",
    description = "Returns the album with the given identifier.",
    params(
        ("id" = i64, Path, description = "Album identifier"),
    ),
    responses(
        (status = 200, description = "Album details", body = AlbumDto),
        (status = 400, description = "Invalid identifier", body = ErrorResponse),
        (status = 404, description = "Album not found", body = ErrorResponse),
    )
)]
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CatalogError> {
    let id = parse_album_id(id)?;
    let album = state.album_service.get(id).await?;

    Ok(Json(AlbumDto::from(album)))
}

/// `PUT /albums/:id` — Replace an album's title and artist.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] if the submitted fields fail
/// validation, or [`CatalogError::AlbumNotFound`] if the album does not
/// exist.
#[utoipa::path(
    put,
    path = "/api/v1/albums/{id}",
    tag = "Albums",
    summary = "Update an album",
    description = "Validates the submitted fields and replaces the stored title and artist of an existing album.",
    params(
        ("id" = i64, Path, description = "Album identifier"),
    ),
    request_body = UpdateAlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = AlbumDto),
        (status = 400, description = "Invalid identifier", body = ErrorResponse),
        (status = 404, description = "Album not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAlbumRequest>,
) -> Result<impl IntoResponse, CatalogError> {
    let id = parse_album_id(id)?;
    let album = state
        .album_service
        .update(id, AlbumDraft::new(req.title, req.artist))
        .await?;

    Ok(Json(AlbumDto::from(album)))
}

/// `DELETE /albums/:id` — Remove an album.
///
/// # Errors
///
/// Returns [`CatalogError::AlbumNotFound`] if the album does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/albums/{id}",
    tag = "Albums",
    summary = "Delete an album",
    description = "Removes the album with the given identifier.",
    params(
        ("id" = i64, Path, description = "Album identifier"),
    ),
    responses(
        (status = 204, description = "Album deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorResponse),
        (status = 404, description = "Album not found", body = ErrorResponse),
    )
)]
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CatalogError> {
    let id = parse_album_id(id)?;
    state.album_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Album catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/albums", post(create_album).get(list_albums))
        .route(
            "/albums/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
}

// ── Path Parameter Helpers ──────────────────────────────────────────────

/// Parses a raw path identifier. Storage keys start at 1, so zero and
/// negative values are rejected before touching the store.
fn parse_album_id(raw: i64) -> Result<crate::domain::AlbumId, CatalogError> {
    if raw < 1 {
        return Err(CatalogError::InvalidRequest(format!(
            "album id must be positive, got {raw}"
        )));
    }
    Ok(crate::domain::AlbumId::new(raw))
}
