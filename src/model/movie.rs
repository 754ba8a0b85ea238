use super::{coerce, Field, Table};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MOVIE_TABLE: Table = Table {
    name: "movie",
    columns: &[
        "id",
        "title",
        "description",
        "trailer",
        "year",
        "rating",
        "genre_id",
        "director_id",
    ],
};

/// Stored movie. `genre_id` and `director_id` are unchecked references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Trailer URL.
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// Full movie payload used by create and full update. Missing keys are `None`.
/// Numeric columns also accept numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    #[serde(default, deserialize_with = "coerce::option")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "coerce::option")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "coerce::option")]
    pub genre_id: Option<i64>,
    #[serde(default, deserialize_with = "coerce::option")]
    pub director_id: Option<i64>,
}

impl MovieFields {
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            trailer: self.trailer,
            year: self.year,
            rating: self.rating,
            genre_id: self.genre_id,
            director_id: self.director_id,
        }
    }

    /// Column values for INSERT, in table order without the primary key.
    pub fn values(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", SqlValue::from(self.title.clone())),
            ("description", SqlValue::from(self.description.clone())),
            ("trailer", SqlValue::from(self.trailer.clone())),
            ("year", SqlValue::from(self.year)),
            ("rating", SqlValue::from(self.rating)),
            ("genre_id", SqlValue::from(self.genre_id)),
            ("director_id", SqlValue::from(self.director_id)),
        ]
    }
}

/// Partial movie payload. Only keys present in the body are written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoviePatch {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub description: Field<String>,
    #[serde(default)]
    pub trailer: Field<String>,
    #[serde(default, deserialize_with = "coerce::field")]
    pub year: Field<i32>,
    #[serde(default, deserialize_with = "coerce::field")]
    pub rating: Field<f64>,
    #[serde(default, deserialize_with = "coerce::field")]
    pub genre_id: Field<i64>,
    #[serde(default, deserialize_with = "coerce::field")]
    pub director_id: Field<i64>,
}

impl MoviePatch {
    pub fn apply(&self, movie: &mut Movie) {
        self.title.apply_to(&mut movie.title);
        self.description.apply_to(&mut movie.description);
        self.trailer.apply_to(&mut movie.trailer);
        self.year.apply_to(&mut movie.year);
        self.rating.apply_to(&mut movie.rating);
        self.genre_id.apply_to(&mut movie.genre_id);
        self.director_id.apply_to(&mut movie.director_id);
    }

    /// SET list for UPDATE: present columns only.
    pub fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        let mut sets = Vec::new();
        if let Some(v) = self.title.as_present() {
            sets.push(("title", SqlValue::from(v.clone())));
        }
        if let Some(v) = self.description.as_present() {
            sets.push(("description", SqlValue::from(v.clone())));
        }
        if let Some(v) = self.trailer.as_present() {
            sets.push(("trailer", SqlValue::from(v.clone())));
        }
        if let Some(v) = self.year.as_present() {
            sets.push(("year", SqlValue::from(*v)));
        }
        if let Some(v) = self.rating.as_present() {
            sets.push(("rating", SqlValue::from(*v)));
        }
        if let Some(v) = self.genre_id.as_present() {
            sets.push(("genre_id", SqlValue::from(*v)));
        }
        if let Some(v) = self.director_id.as_present() {
            sets.push(("director_id", SqlValue::from(*v)));
        }
        sets
    }
}

/// Full update: every column is written, missing ones as NULL.
impl From<MovieFields> for MoviePatch {
    fn from(f: MovieFields) -> Self {
        MoviePatch {
            title: f.title.into(),
            description: f.description.into(),
            trailer: f.trailer.into(),
            year: f.year.into(),
            rating: f.rating.into(),
            genre_id: f.genre_id.into(),
            director_id: f.director_id.into(),
        }
    }
}
