use super::Table;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DIRECTOR_TABLE: Table = Table {
    name: "director",
    columns: &["id", "name"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Director {
    pub id: i64,
    pub name: Option<String>,
}

/// Insert payload; directors are only created by seeding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDirector {
    pub name: Option<String>,
}
