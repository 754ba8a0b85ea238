//! OpenAPI document for the catalog endpoints.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{directors, genres, movies};
use crate::model::{Director, Genre, Movie, MovieFields};
use crate::response::Message;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie catalog", description = "Movies, directors and genres"),
    paths(
        movies::list,
        movies::create,
        movies::read,
        movies::replace,
        movies::update,
        movies::delete,
        directors::list,
        directors::read,
        genres::list,
        genres::read,
    ),
    components(schemas(Movie, MovieFields, Director, Genre, Message, ErrorBody, ErrorDetail)),
    tags(
        (name = "movies", description = "Movie library"),
        (name = "directors", description = "Read-only director reference table"),
        (name = "genres", description = "Read-only genre reference table"),
    )
)]
pub struct ApiDoc;

async fn swagger() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /swagger.json.
pub fn docs_routes() -> Router {
    Router::new().route("/swagger.json", get(swagger))
}
