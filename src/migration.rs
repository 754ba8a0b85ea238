//! Create the catalog tables. Idempotent; safe to run on every start.
//!
//! `movie.genre_id` and `movie.director_id` are plain columns with indexes but
//! no FOREIGN KEY constraint, so references to missing rows are accepted.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS "director" (
  "id" BIGSERIAL PRIMARY KEY,
  "name" VARCHAR(255)
)"#,
    r#"CREATE TABLE IF NOT EXISTS "genre" (
  "id" BIGSERIAL PRIMARY KEY,
  "name" VARCHAR(255)
)"#,
    r#"CREATE TABLE IF NOT EXISTS "movie" (
  "id" BIGSERIAL PRIMARY KEY,
  "title" VARCHAR(255),
  "description" VARCHAR(255),
  "trailer" VARCHAR(255),
  "year" INTEGER,
  "rating" DOUBLE PRECISION,
  "genre_id" BIGINT,
  "director_id" BIGINT
)"#,
    r#"CREATE INDEX IF NOT EXISTS "movie_director_id_idx" ON "movie" USING btree ("director_id")"#,
    r#"CREATE INDEX IF NOT EXISTS "movie_genre_id_idx" ON "movie" USING btree ("genre_id")"#,
];

pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for sql in DDL {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(statements = DDL.len(), "catalog tables ready");
    Ok(())
}
