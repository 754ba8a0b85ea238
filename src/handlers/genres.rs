//! Genre handlers: list and read. Genres are read-only over HTTP.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::model::Genre;
use crate::response;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    get,
    path = "/genres/",
    tag = "genres",
    responses((status = 200, description = "Every genre, ordered by id", body = Vec<Genre>))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list_genres(state.store.as_ref()).await?;
    Ok(response::ok(rows))
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i64, Path, description = "Genre id")),
    responses(
        (status = 200, description = "The genre", body = Genre),
        (status = 404, description = "No genre with this id", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CatalogService::get_genre(state.store.as_ref(), id).await?;
    Ok(response::ok(row))
}
