//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A repetition target must be at least one.
    #[error("target must be a positive integer, got {value}")]
    NonPositiveTarget { value: i64 },

    /// A target that isn't a number at all.
    #[error("target must be a positive integer, got {value:?}")]
    InvalidTarget { value: String },

    /// Invalid azkar category value.
    #[error("invalid category: {value}")]
    InvalidCategory { value: String },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated dhikr identifier.
    ///
    /// Built-in presets use short numeric ids ("1".."9"); custom azkar get a UUID.
    DhikrId, "dhikr ID"
);

/// A repetition goal, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Target(u32);

impl Target {
    /// The default target used when a selection carries no explicit count.
    pub const DEFAULT: Self = Self(33);

    /// Quick-pick targets offered next to a custom value.
    pub const QUICK_PICKS: [Self; 3] = [Self(33), Self(100), Self(1000)];

    /// Creates a target after validation.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(Self(v)),
            _ => Err(ValidationError::NonPositiveTarget { value }),
        }
    }

    /// Interprets an optional count the way selections do: zero or absent means "none".
    #[must_use]
    pub const fn from_count(count: Option<u32>) -> Option<Self> {
        match count {
            Some(v) if v > 0 => Some(Self(v)),
            _ => None,
        }
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this is one of the quick-pick values.
    #[must_use]
    pub fn is_quick_pick(self) -> bool {
        Self::QUICK_PICKS.contains(&self)
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Target {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Target> for u32 {
    fn from(target: Target) -> Self {
        target.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Target {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidTarget {
                value: s.to_string(),
            })?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dhikr_id_rejects_empty() {
        assert_eq!(
            DhikrId::new(""),
            Err(ValidationError::Empty { field: "dhikr ID" })
        );
        assert_eq!(DhikrId::new("7").unwrap().as_str(), "7");
    }

    #[test]
    fn test_dhikr_id_serde_rejects_empty() {
        let result: Result<DhikrId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_target_validation() {
        assert_eq!(Target::new(1).unwrap().get(), 1);
        assert_eq!(
            Target::new(0),
            Err(ValidationError::NonPositiveTarget { value: 0 })
        );
        assert!(Target::new(-5).is_err());
        assert!(Target::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_target_from_count_treats_zero_as_absent() {
        assert_eq!(Target::from_count(None), None);
        assert_eq!(Target::from_count(Some(0)), None);
        assert_eq!(Target::from_count(Some(7)).map(Target::get), Some(7));
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("100".parse::<Target>().unwrap().get(), 100);
        assert_eq!(" 50 ".parse::<Target>().unwrap().get(), 50);
        assert_eq!(
            "abc".parse::<Target>(),
            Err(ValidationError::InvalidTarget {
                value: "abc".to_string()
            })
        );
        assert!("0".parse::<Target>().is_err());
    }

    #[test]
    fn test_target_quick_picks() {
        assert!(Target::DEFAULT.is_quick_pick());
        assert!(Target::new(1000).unwrap().is_quick_pick());
        assert!(!Target::new(50).unwrap().is_quick_pick());
    }

    #[test]
    fn test_target_serde() {
        let target: Target = serde_json::from_str("100").unwrap();
        assert_eq!(target.get(), 100);
        assert_eq!(serde_json::to_string(&target).unwrap(), "100");
        assert!(serde_json::from_str::<Target>("0").is_err());
    }
}
