//! Catalog entities, their wire shapes and their table layout.

mod coerce;
mod director;
mod field;
mod genre;
mod movie;

pub use director::*;
pub use field::Field;
pub use genre::*;
pub use movie::*;

/// Table name plus its columns in select order. The first column is the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Table {
    pub fn pk(&self) -> &'static str {
        self.columns[0]
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| *c == name)
    }
}
