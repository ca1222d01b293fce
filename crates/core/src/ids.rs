//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// Numeric backend identifier tagged with the type it identifies.
pub struct TypedId<T>(u64, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wrap a raw backend id.
    pub const fn new(value: u64) -> Self {
        Self(value, PhantomData)
    }

    /// The raw backend id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

/// Ids come back as JSON numbers from most endpoints and as numeric strings
/// from a few.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(Self::new(value)),
            RawId::Text(text) => text
                .trim()
                .parse()
                .map(Self::new)
                .map_err(|error| D::Error::custom(format!("invalid id {text:?}: {error}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    struct Marker;

    #[test]
    fn deserializes_numbers_and_numeric_strings() -> TestResult {
        let from_number: TypedId<Marker> = serde_json::from_str("42")?;
        let from_text: TypedId<Marker> = serde_json::from_str("\" 42 \"")?;

        assert_eq!(from_number, from_text);
        assert_eq!(from_number.get(), 42);

        Ok(())
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let result = serde_json::from_str::<TypedId<Marker>>("\"abc\"");

        assert!(result.is_err());
    }

    #[test]
    fn serializes_as_plain_number() -> TestResult {
        let id = TypedId::<Marker>::new(7);

        assert_eq!(serde_json::to_string(&id)?, "7");
        assert_eq!(id.to_string(), "7");

        Ok(())
    }
}
