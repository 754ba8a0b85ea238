//! Lenient numeric fields: a JSON number, `null`, or a string holding a JSON number.
//!
//! Used through `#[serde(default, deserialize_with = "...")]` on the numeric movie columns.

use super::Field;
use serde::de::{DeserializeOwned, Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

/// `"1995"` reads as `1995`; `"soon"` is an error naming the value.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::String(s) => match serde_json::from_str::<Value>(s.trim()) {
            Ok(n @ Value::Number(_)) => n,
            _ => return Err(D::Error::custom(format!("expected a number, got \"{}\"", s))),
        },
        other => other,
    };
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}

/// [`option`] for PATCH bodies. Only runs when the key is present.
pub fn field<'de, D, T>(deserializer: D) -> Result<Field<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    option(deserializer).map(Field::Present)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Numbers {
        #[serde(default, deserialize_with = "option")]
        year: Option<i32>,
        #[serde(default, deserialize_with = "field")]
        rating: Field<f64>,
    }

    fn parse(json: &str) -> Result<Numbers, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn numeric_strings_become_numbers() {
        let n = parse(r#"{"year": " 1995 ", "rating": "8.3"}"#).unwrap();
        assert_eq!(n.year, Some(1995));
        assert_eq!(n.rating, Field::Present(Some(8.3)));
    }

    #[test]
    fn numbers_and_null_pass_through() {
        let n = parse(r#"{"year": 2010, "rating": null}"#).unwrap();
        assert_eq!(n.year, Some(2010));
        assert_eq!(n.rating, Field::Present(None));

        let n = parse("{}").unwrap();
        assert_eq!(n.year, None);
        assert_eq!(n.rating, Field::Absent);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        let err = parse(r#"{"year": "nineteen"}"#).unwrap_err();
        assert!(err.to_string().contains("nineteen"));
        assert!(parse(r#"{"rating": "NaN"}"#).is_err());
        assert!(parse(r#"{"rating": ""}"#).is_err());
    }

    #[test]
    fn fractional_string_is_not_an_integer() {
        assert!(parse(r#"{"year": "1995.5"}"#).is_err());
        assert!(parse(r#"{"year": true}"#).is_err());
    }
}
