//! HTTP handlers for movies, directors and genres.

pub mod directors;
pub mod genres;
pub mod movies;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// Decode a JSON object body into `T`. Unknown keys are ignored; a wrong type is a
/// bad request naming the offending key.
fn parse_body<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_path_to_error::deserialize(value).map_err(|e| {
        AppError::BadRequest(format!("invalid value for '{}': {}", e.path(), e.inner()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MovieFields, MoviePatch};
    use serde_json::json;

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn parse_body_requires_object() {
        let err = parse_body::<MovieFields>(json!([1, 2])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn parse_body_names_the_bad_field() {
        let err = parse_body::<MovieFields>(json!({"title": "Heat", "year": "soon"})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().contains("'year'"), "{}", err);

        let err = parse_body::<MoviePatch>(json!({"rating": [8]})).unwrap_err();
        assert!(err.to_string().contains("'rating'"), "{}", err);
    }
}
