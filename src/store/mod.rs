//! Storage capability injected into handlers.
//!
//! [`Store`] is the seam between the HTTP layer and persistence. Every write is
//! atomic: it either commits fully or leaves storage unchanged.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, PgStore};

use crate::error::AppError;
use crate::filter::MovieFilter;
use crate::model::{Director, Genre, Movie, MovieFields, MoviePatch, NewDirector, NewGenre};
use async_trait::async_trait;

#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap liveness check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;

    /// Movies matching `filter`, ordered by id.
    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, AppError>;

    async fn get_movie(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Insert and return the stored row with its assigned id.
    async fn insert_movie(&self, fields: &MovieFields) -> Result<Movie, AppError>;

    /// Write the present columns of `patch`. `None` when no row has `id`.
    async fn update_movie(&self, id: i64, patch: &MoviePatch) -> Result<Option<Movie>, AppError>;

    /// `false` when no row has `id`.
    async fn delete_movie(&self, id: i64) -> Result<bool, AppError>;

    async fn list_directors(&self) -> Result<Vec<Director>, AppError>;

    async fn get_director(&self, id: i64) -> Result<Option<Director>, AppError>;

    async fn insert_director(&self, director: &NewDirector) -> Result<Director, AppError>;

    async fn list_genres(&self) -> Result<Vec<Genre>, AppError>;

    async fn get_genre(&self, id: i64) -> Result<Option<Genre>, AppError>;

    async fn insert_genre(&self, genre: &NewGenre) -> Result<Genre, AppError>;
}
