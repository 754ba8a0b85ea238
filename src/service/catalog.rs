//! Catalog operations over an injected [`Store`]: absent rows become
//! [`AppError::NotFound`], mutations are logged.

use crate::error::AppError;
use crate::filter::MovieFilter;
use crate::model::{
    Director, Genre, Movie, MovieFields, MoviePatch, DIRECTOR_TABLE, GENRE_TABLE, MOVIE_TABLE,
};
use crate::store::Store;

pub struct CatalogService;

impl CatalogService {
    /// All movies matching `filter` (every movie when it is empty), ordered by id.
    pub async fn list_movies(store: &dyn Store, filter: &MovieFilter) -> Result<Vec<Movie>, AppError> {
        store.list_movies(filter).await
    }

    pub async fn get_movie(store: &dyn Store, id: i64) -> Result<Movie, AppError> {
        store
            .get_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found(MOVIE_TABLE.name, id))
    }

    pub async fn create_movie(store: &dyn Store, fields: &MovieFields) -> Result<Movie, AppError> {
        let movie = store.insert_movie(fields).await?;
        tracing::info!(id = movie.id, title = ?movie.title, "movie created");
        Ok(movie)
    }

    /// Full update: every mutable column is overwritten, missing ones with NULL.
    pub async fn replace_movie(store: &dyn Store, id: i64, fields: MovieFields) -> Result<Movie, AppError> {
        let patch = MoviePatch::from(fields);
        let movie = store
            .update_movie(id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found(MOVIE_TABLE.name, id))?;
        tracing::info!(id, "movie replaced");
        Ok(movie)
    }

    /// Partial update: only columns present in `patch` change.
    pub async fn patch_movie(store: &dyn Store, id: i64, patch: &MoviePatch) -> Result<Movie, AppError> {
        let movie = store
            .update_movie(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(MOVIE_TABLE.name, id))?;
        tracing::info!(id, columns = patch.assignments().len(), "movie patched");
        Ok(movie)
    }

    pub async fn delete_movie(store: &dyn Store, id: i64) -> Result<(), AppError> {
        if !store.delete_movie(id).await? {
            return Err(AppError::not_found(MOVIE_TABLE.name, id));
        }
        tracing::info!(id, "movie deleted");
        Ok(())
    }

    pub async fn list_directors(store: &dyn Store) -> Result<Vec<Director>, AppError> {
        store.list_directors().await
    }

    pub async fn get_director(store: &dyn Store, id: i64) -> Result<Director, AppError> {
        store
            .get_director(id)
            .await?
            .ok_or_else(|| AppError::not_found(DIRECTOR_TABLE.name, id))
    }

    pub async fn list_genres(store: &dyn Store) -> Result<Vec<Genre>, AppError> {
        store.list_genres().await
    }

    pub async fn get_genre(store: &dyn Store, id: i64) -> Result<Genre, AppError> {
        store
            .get_genre(id)
            .await?
            .ok_or_else(|| AppError::not_found(GENRE_TABLE.name, id))
    }
}
