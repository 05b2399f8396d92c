use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Unit
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(u64);

/// Unique identifier for a Chapter
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChapterId(u64);

/// Unique identifier for a Concept
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptId(u64);

/// Unique identifier for a Topic
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicId(u64);

/// Error type for parsing an ID from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! id_impls {
    ($ty:ident) => {
        impl $ty {
            /// Creates a new id from its raw value.
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value.
            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($ty), "({})"), self.0)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map($ty::new).map_err(|_| ParseIdError {
                    kind: stringify!($ty),
                })
            }
        }
    };
}

id_impls!(UnitId);
id_impls!(ChapterId);
id_impls!(ConceptId);
id_impls!(TopicId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_id_display() {
        let id = TopicId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_topic_id_from_str() {
        let id: TopicId = "123".parse().unwrap();
        assert_eq!(id, TopicId::new(123));
    }

    #[test]
    fn test_topic_id_from_str_invalid() {
        let result = "not-a-number".parse::<TopicId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_id_roundtrip() {
        let original = UnitId::new(7);
        let deserialized: UnitId = original.to_string().parse().unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ChapterId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
