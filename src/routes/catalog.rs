//! Catalog routes. Collections answer with and without the trailing slash.

use crate::handlers::{directors, genres, movies};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route(
            "/movies/:id",
            get(movies::read)
                .put(movies::replace)
                .patch(movies::update)
                .delete(movies::delete),
        )
        .route("/directors", get(directors::list))
        .route("/directors/", get(directors::list))
        .route("/directors/:id", get(directors::read))
        .route("/genres", get(genres::list))
        .route("/genres/", get(genres::list))
        .route("/genres/:id", get(genres::read))
        .with_state(state)
}
