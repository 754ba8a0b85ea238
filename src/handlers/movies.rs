//! Movie handlers: list/filter, create, read, full and partial update, delete.

use super::{parse_body, parse_id};
use crate::error::{AppError, ErrorBody};
use crate::filter::MovieFilter;
use crate::model::{Movie, MovieFields, MoviePatch};
use crate::response::{self, Message};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

#[utoipa::path(
    get,
    path = "/movies/",
    tag = "movies",
    params(
        ("director_id" = Option<i64>, Query, description = "Only movies by this director"),
        ("genre_id" = Option<i64>, Query, description = "Only movies in this genre"),
    ),
    responses(
        (status = 200, description = "Every matching movie, ordered by id", body = Vec<Movie>),
        (status = 400, description = "Filter value is not an integer", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = MovieFilter::from_params(&params)?;
    let movies = CatalogService::list_movies(state.store.as_ref(), &filter).await?;
    Ok(response::ok(movies))
}

#[utoipa::path(
    post,
    path = "/movies/",
    tag = "movies",
    request_body = MovieFields,
    responses(
        (status = 201, description = "Created; empty body, Location header points at the movie"),
        (status = 400, description = "Malformed body", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let fields: MovieFields = parse_body(body?.0)?;
    let movie = CatalogService::create_movie(state.store.as_ref(), &fields).await?;
    Ok(response::created_at(format!("/movies/{}", movie.id)))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let movie = CatalogService::get_movie(state.store.as_ref(), id).await?;
    Ok(response::ok(movie))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    request_body(content = MovieFields, description = "Every column is written; missing keys become null"),
    responses(
        (status = 204, description = "Replaced"),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let fields: MovieFields = parse_body(body?.0)?;
    CatalogService::replace_movie(state.store.as_ref(), id, fields).await?;
    Ok(response::no_content())
}

#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    request_body(content = MovieFields, description = "Only the keys present are written"),
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let patch: MoviePatch = parse_body(body?.0)?;
    CatalogService::patch_movie(state.store.as_ref(), id, &patch).await?;
    Ok(response::no_content())
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Deleted", body = Message),
        (status = 404, description = "No movie with this id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CatalogService::delete_movie(state.store.as_ref(), id).await?;
    Ok(response::message(format!("movie {} deleted", id)))
}
