use super::Table;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GENRE_TABLE: Table = Table {
    name: "genre",
    columns: &["id", "name"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Genre {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGenre {
    pub name: Option<String>,
}
