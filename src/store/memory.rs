//! In-process [`Store`] for tests and database-less runs.

use super::Store;
use crate::error::AppError;
use crate::filter::MovieFilter;
use crate::model::{Director, Genre, Movie, MovieFields, MoviePatch, NewDirector, NewGenre};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One table: rows keyed by id plus the next id to hand out. Ids start at 1
/// and are never reused, matching a database sequence.
#[derive(Debug)]
struct Rows<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Rows {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Rows<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Debug, Default)]
struct Tables {
    movies: Rows<Movie>,
    directors: Rows<Director>,
    genres: Rows<Genre>,
}

/// Every write happens under one write guard, so it is applied whole or not at all.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .movies
            .rows
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn get_movie(&self, id: i64) -> Result<Option<Movie>, AppError> {
        Ok(self.read()?.movies.rows.get(&id).cloned())
    }

    async fn insert_movie(&self, fields: &MovieFields) -> Result<Movie, AppError> {
        let mut tables = self.write()?;
        let id = tables.movies.allocate_id();
        let movie = fields.clone().into_movie(id);
        tables.movies.rows.insert(id, movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, id: i64, patch: &MoviePatch) -> Result<Option<Movie>, AppError> {
        let mut tables = self.write()?;
        Ok(tables.movies.rows.get_mut(&id).map(|movie| {
            patch.apply(movie);
            movie.clone()
        }))
    }

    async fn delete_movie(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.movies.rows.remove(&id).is_some())
    }

    async fn list_directors(&self) -> Result<Vec<Director>, AppError> {
        Ok(self.read()?.directors.rows.values().cloned().collect())
    }

    async fn get_director(&self, id: i64) -> Result<Option<Director>, AppError> {
        Ok(self.read()?.directors.rows.get(&id).cloned())
    }

    async fn insert_director(&self, director: &NewDirector) -> Result<Director, AppError> {
        let mut tables = self.write()?;
        let id = tables.directors.allocate_id();
        let row = Director {
            id,
            name: director.name.clone(),
        };
        tables.directors.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, AppError> {
        Ok(self.read()?.genres.rows.values().cloned().collect())
    }

    async fn get_genre(&self, id: i64) -> Result<Option<Genre>, AppError> {
        Ok(self.read()?.genres.rows.get(&id).cloned())
    }

    async fn insert_genre(&self, genre: &NewGenre) -> Result<Genre, AppError> {
        let mut tables = self.write()?;
        let id = tables.genres.allocate_id();
        let row = Genre {
            id,
            name: genre.name.clone(),
        };
        tables.genres.rows.insert(id, row.clone());
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str, director_id: Option<i64>) -> MovieFields {
        MovieFields {
            title: Some(title.into()),
            director_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table_and_not_reused() {
        let store = MemoryStore::new();
        let a = store.insert_movie(&titled("A", None)).await.unwrap();
        let b = store.insert_movie(&titled("B", None)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert!(store.delete_movie(2).await.unwrap());
        let c = store.insert_movie(&titled("C", None)).await.unwrap();
        assert_eq!(c.id, 3);

        let d = store.insert_director(&NewDirector { name: Some("Nolan".into()) }).await.unwrap();
        assert_eq!(d.id, 1);
    }

    #[tokio::test]
    async fn list_applies_filter_in_id_order() {
        let store = MemoryStore::new();
        store.insert_movie(&titled("A", Some(1))).await.unwrap();
        store.insert_movie(&titled("B", Some(2))).await.unwrap();
        store.insert_movie(&titled("C", Some(1))).await.unwrap();
        let filter = MovieFilter {
            director_id: Some(1),
            genre_id: None,
        };
        let titles: Vec<_> = store
            .list_movies(&filter)
            .await
            .unwrap()
            .into_iter()
            .filter_map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = MemoryStore::new();
        assert_eq!(store.update_movie(9, &MoviePatch::default()).await.unwrap(), None);
        assert!(!store.delete_movie(9).await.unwrap());
    }
}
