//! PostgreSQL-backed [`Store`]. Writes run in a transaction that commits on
//! success; returning early with `?` drops it and rolls back.

use super::Store;
use crate::error::AppError;
use crate::filter::MovieFilter;
use crate::model::{
    Director, Genre, Movie, MovieFields, MoviePatch, NewDirector, NewGenre, DIRECTOR_TABLE, GENRE_TABLE,
    MOVIE_TABLE,
};
use crate::sql::{self, QueryBuf, SqlValue};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow, Postgres};
use sqlx::{ConnectOptions, Executor, FromRow, PgPool};
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

async fn fetch_all<'c, E, T>(executor: E, q: &QueryBuf) -> Result<Vec<T>, AppError>
where
    E: Executor<'c, Database = Postgres>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(executor).await?)
}

async fn fetch_optional<'c, E, T>(executor: E, q: &QueryBuf) -> Result<Option<T>, AppError>
where
    E: Executor<'c, Database = Postgres>,
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_optional(executor).await?)
}

impl PgStore {
    async fn insert_row<T>(&self, q: QueryBuf) -> Result<T, AppError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut tx = self.pool.begin().await?;
        let row = fetch_optional::<_, T>(&mut *tx, &q)
            .await?
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        Ok(row)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, AppError> {
        let q = sql::select_where(&MOVIE_TABLE, &filter.conditions());
        fetch_all(&self.pool, &q).await
    }

    async fn get_movie(&self, id: i64) -> Result<Option<Movie>, AppError> {
        fetch_optional(&self.pool, &sql::select_by_id(&MOVIE_TABLE, id)).await
    }

    async fn insert_movie(&self, fields: &MovieFields) -> Result<Movie, AppError> {
        self.insert_row(sql::insert(&MOVIE_TABLE, &fields.values())).await
    }

    async fn update_movie(&self, id: i64, patch: &MoviePatch) -> Result<Option<Movie>, AppError> {
        let q = sql::update(&MOVIE_TABLE, id, &patch.assignments());
        let mut tx = self.pool.begin().await?;
        let row = fetch_optional::<_, Movie>(&mut *tx, &q).await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete_movie(&self, id: i64) -> Result<bool, AppError> {
        let q = sql::delete(&MOVIE_TABLE, id);
        let mut tx = self.pool.begin().await?;
        let removed = fetch_optional::<_, (i64,)>(&mut *tx, &q).await?;
        tx.commit().await?;
        Ok(removed.is_some())
    }

    async fn list_directors(&self) -> Result<Vec<Director>, AppError> {
        fetch_all(&self.pool, &sql::select_all(&DIRECTOR_TABLE)).await
    }

    async fn get_director(&self, id: i64) -> Result<Option<Director>, AppError> {
        fetch_optional(&self.pool, &sql::select_by_id(&DIRECTOR_TABLE, id)).await
    }

    async fn insert_director(&self, director: &NewDirector) -> Result<Director, AppError> {
        let values = [("name", SqlValue::from(director.name.clone()))];
        self.insert_row(sql::insert(&DIRECTOR_TABLE, &values)).await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, AppError> {
        fetch_all(&self.pool, &sql::select_all(&GENRE_TABLE)).await
    }

    async fn get_genre(&self, id: i64) -> Result<Option<Genre>, AppError> {
        fetch_optional(&self.pool, &sql::select_by_id(&GENRE_TABLE, id)).await
    }

    async fn insert_genre(&self, genre: &NewGenre) -> Result<Genre, AppError> {
        let values = [("name", SqlValue::from(genre.name.clone()))];
        self.insert_row(sql::insert(&GENRE_TABLE, &values)).await
    }
}

/// Create the database named in `database_url` if it does not exist yet.
/// Connects to the `postgres` maintenance database on the same server to do so.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = target_database(database_url)?;
    let Some(db_name) = db_name else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the maintenance connection, plus the database to create. `None` when
/// the URL names no database or names `postgres` itself.
fn target_database(url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {}", e)))?;
    let db_name = opts
        .get_database()
        .map(str::to_string)
        .filter(|name| !name.is_empty() && name != "postgres");
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_database_reads_name_from_path() {
        let (admin, name) = target_database("postgres://u:p@localhost:5432/movies?sslmode=disable").unwrap();
        assert_eq!(name.as_deref(), Some("movies"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn target_database_with_socket_host() {
        let (admin, name) = target_database("postgres:///movies?host=/var/run/postgresql").unwrap();
        assert_eq!(name.as_deref(), Some("movies"));
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn target_database_skips_missing_or_maintenance_name() {
        let (_, name) = target_database("postgres://u:p@localhost:5432/postgres").unwrap();
        assert_eq!(name, None);
        let (admin, name) = target_database("postgres://localhost").unwrap();
        assert_eq!(name, None);
        assert_eq!(admin.get_host(), "localhost");
    }

    #[test]
    fn target_database_rejects_garbage() {
        assert!(matches!(target_database("not a url"), Err(AppError::Internal(_))));
    }

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident(r#"we"ird"#), r#""we""ird""#);
    }
}
