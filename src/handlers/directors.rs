//! Director handlers: list and read. Directors are read-only over HTTP.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::model::Director;
use crate::response;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    get,
    path = "/directors/",
    tag = "directors",
    responses((status = 200, description = "Every director, ordered by id", body = Vec<Director>))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list_directors(state.store.as_ref()).await?;
    Ok(response::ok(rows))
}

#[utoipa::path(
    get,
    path = "/directors/{id}",
    tag = "directors",
    params(("id" = i64, Path, description = "Director id")),
    responses(
        (status = 200, description = "The director", body = Director),
        (status = 404, description = "No director with this id", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CatalogService::get_director(state.store.as_ref(), id).await?;
    Ok(response::ok(row))
}
