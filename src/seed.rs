//! Load fixture rows from a directory of JSON files and insert them.
//!
//! The API has no create endpoint for directors or genres; seeding is how they get in.

use crate::error::{AppError, ConfigError};
use crate::model::{MovieFields, NewDirector, NewGenre};
use crate::store::Store;
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    pub directors: Vec<NewDirector>,
    pub genres: Vec<NewGenre>,
    pub movies: Vec<MovieFields>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub directors: usize,
    pub genres: usize,
    pub movies: usize,
}

/// Read `directors.json`, `genres.json` and `movies.json` from `dir`. A missing file is an empty list.
pub async fn load_seed(dir: &Path) -> Result<Seed, ConfigError> {
    if !tokio::fs::try_exists(dir).await? {
        return Err(ConfigError::Seed(format!("{} does not exist", dir.display())));
    }
    Ok(Seed {
        directors: read_list(&dir.join("directors.json")).await?,
        genres: read_list(&dir.join("genres.json")).await?,
        movies: read_list(&dir.join("movies.json")).await?,
    })
}

async fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&raw).map_err(|e| ConfigError::Seed(format!("{}: {}", path.display(), e)))
}

/// Insert directors, then genres, then movies, so seeded movies can use the ids 1..n
/// handed out to a fresh store.
pub async fn apply_seed(store: &dyn Store, seed: &Seed) -> Result<SeedReport, AppError> {
    for d in &seed.directors {
        store.insert_director(d).await?;
    }
    for g in &seed.genres {
        store.insert_genre(g).await?;
    }
    for m in &seed.movies {
        store.insert_movie(m).await?;
    }
    let report = SeedReport {
        directors: seed.directors.len(),
        genres: seed.genres.len(),
        movies: seed.movies.len(),
    };
    tracing::info!(
        directors = report.directors,
        genres = report.genres,
        movies = report.movies,
        "seed applied"
    );
    Ok(report)
}
