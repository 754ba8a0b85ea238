//! Movie list filters from the query string.

use crate::error::AppError;
use crate::model::Movie;
use crate::sql::SqlValue;
use std::collections::HashMap;

/// Exact-match filters for `GET /movies/`. Present filters combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}

impl MovieFilter {
    /// Parse `director_id` / `genre_id`. Empty values count as absent; other keys are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        Ok(MovieFilter {
            director_id: parse_id_param(params, "director_id")?,
            genre_id: parse_id_param(params, "genre_id")?,
        })
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        self.director_id.map_or(true, |id| movie.director_id == Some(id))
            && self.genre_id.map_or(true, |id| movie.genre_id == Some(id))
    }

    /// WHERE conditions for the SQL builder.
    pub fn conditions(&self) -> Vec<(&'static str, SqlValue)> {
        let mut out = Vec::new();
        if let Some(id) = self.director_id {
            out.push(("director_id", SqlValue::from(id)));
        }
        if let Some(id) = self.genre_id {
            out.push(("genre_id", SqlValue::from(id)));
        }
        out
    }
}

fn parse_id_param(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, AppError> {
    match params.get(key).map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{} must be an integer, got '{}'", key, s))),
    }
}
