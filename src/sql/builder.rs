//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a table descriptor.

use super::SqlValue;
use crate::model::Table;

/// Quote identifier for PostgreSQL (safe: only from table descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &Table) -> QueryBuf {
    select_where(table, &[])
}

/// SELECT by primary key. Binds `id` as the sole param.
pub fn select_by_id(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlValue::from(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk()),
        n
    );
    q
}

/// SELECT with exact-match filters joined by AND, ordered by primary key.
/// Filters on columns the table does not have are skipped.
pub fn select_where(table: &Table, filters: &[(&str, SqlValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (col, val) in filters {
        if !table.has_column(col) {
            continue;
        }
        let n = q.push_param(val.clone());
        where_parts.push(format!("{} = ${}", quoted(col), n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        where_clause,
        quoted(table.pk())
    );
    q
}

/// INSERT the given columns; the primary key is left to its sequence.
pub fn insert(table: &Table, values: &[(&str, SqlValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (col, val) in values {
        if *col == table.pk() || !table.has_column(col) {
            continue;
        }
        let n = q.push_param(val.clone());
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = if cols.is_empty() {
        format!(
            "INSERT INTO {} DEFAULT VALUES RETURNING {}",
            quoted(table.name),
            select_column_list(table)
        )
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(table.name),
            cols.join(", "),
            placeholders.join(", "),
            select_column_list(table)
        )
    };
    q
}

/// UPDATE by id: SET only the given columns. With nothing to set this
/// degrades to a SELECT by id so the caller still learns whether the row exists.
pub fn update(table: &Table, id: i64, sets: &[(&str, SqlValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut set_parts = Vec::new();
    for (col, val) in sets {
        if *col == table.pk() || !table.has_column(col) {
            continue;
        }
        let n = q.push_param(val.clone());
        set_parts.push(format!("{} = ${}", quoted(col), n));
    }
    if set_parts.is_empty() {
        return select_by_id(table, id);
    }
    let id_param = q.push_param(SqlValue::from(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        set_parts.join(", "),
        quoted(table.pk()),
        id_param,
        select_column_list(table)
    );
    q
}

/// DELETE by id, returning the primary key of the removed row.
pub fn delete(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlValue::from(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        quoted(table.pk()),
        n,
        quoted(table.pk())
    );
    q
}
