//! Typed, nullable values that sqlx can bind.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A column value bound as a query parameter. Each variant carries its own
/// PostgreSQL type so NULLs bind with the column's type.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Float(Option<f64>),
}

impl From<Option<String>> for SqlValue {
    fn from(v: Option<String>) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(v: Option<i32>) -> Self {
        SqlValue::Int(v)
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(v: Option<i64>) -> Self {
        SqlValue::BigInt(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::BigInt(Some(v))
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(v: Option<f64>) -> Self {
        SqlValue::Float(v)
    }
}

impl<'q> Encode<'q, Postgres> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqlValue::Text(v) => <Option<String> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlValue::Int(v) => <Option<i32> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlValue::BigInt(v) => <Option<i64> as Encode<Postgres>>::encode_by_ref(v, buf),
            SqlValue::Float(v) => <Option<f64> as Encode<Postgres>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            SqlValue::Text(_) => PgTypeInfo::with_name("TEXT"),
            SqlValue::Int(_) => PgTypeInfo::with_name("INT4"),
            SqlValue::BigInt(_) => PgTypeInfo::with_name("INT8"),
            SqlValue::Float(_) => PgTypeInfo::with_name("FLOAT8"),
        })
    }
}

impl sqlx::Type<Postgres> for SqlValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
