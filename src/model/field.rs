//! Tri-state request field: absent from the body, or present with a value or `null`.

use serde::{Deserialize, Deserializer};

/// Use with `#[serde(default)]` so a missing key deserializes to [`Field::Absent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Present(Option<T>),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn as_present(&self) -> Option<&Option<T>> {
        match self {
            Field::Present(v) => Some(v),
            Field::Absent => None,
        }
    }
}

impl<T: Clone> Field<T> {
    /// Overwrite `target` when present; leave it alone when absent.
    pub fn apply_to(&self, target: &mut Option<T>) {
        if let Field::Present(v) = self {
            *target = v.clone();
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(v: Option<T>) -> Self {
        Field::Present(v)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Field::Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Rated {
        #[serde(default)]
        rating: Field<f64>,
    }

    #[test]
    fn missing_key_is_absent() {
        let p: Rated = serde_json::from_str("{}").unwrap();
        assert_eq!(p.rating, Field::Absent);
    }

    #[test]
    fn explicit_null_is_present_none() {
        let p: Rated = serde_json::from_str(r#"{"rating": null}"#).unwrap();
        assert_eq!(p.rating, Field::Present(None));
    }

    #[test]
    fn value_is_present_some() {
        let p: Rated = serde_json::from_str(r#"{"rating": 9}"#).unwrap();
        assert_eq!(p.rating, Field::Present(Some(9.0)));
    }

    #[test]
    fn apply_to_skips_absent() {
        let mut target = Some(1.5);
        Field::<f64>::Absent.apply_to(&mut target);
        assert_eq!(target, Some(1.5));
        Field::Present(None).apply_to(&mut target);
        assert_eq!(target, None);
    }
}
