//! Explicit "known or unknown" wrapper for detector outputs.
//!
//! Detectors never fail on absence; they report [`Detected::Unknown`] instead.
//! Consumers must handle the unknown case explicitly, which keeps policy
//! defaults out of the detectors themselves.

use serde::{Serialize, Serializer};

/// Outcome of a single environment detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detected<T> {
    /// The detector produced a value.
    Known(T),
    /// The detector could not determine a value.
    Unknown,
}

impl<T> Detected<T> {
    /// Returns `true` if a value was detected.
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns `true` if nothing was detected.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Borrow the detected value.
    pub const fn as_ref(&self) -> Detected<&T> {
        match self {
            Self::Known(value) => Detected::Known(value),
            Self::Unknown => Detected::Unknown,
        }
    }

    /// Transform the detected value, keeping `Unknown` as-is.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Detected<U> {
        match self {
            Self::Known(value) => Detected::Known(f(value)),
            Self::Unknown => Detected::Unknown,
        }
    }

    /// Chain another detection step that may itself come up empty.
    pub fn and_then<U, F: FnOnce(T) -> Detected<U>>(self, f: F) -> Detected<U> {
        match self {
            Self::Known(value) => f(value),
            Self::Unknown => Detected::Unknown,
        }
    }

    /// Prefer this value, falling back to `other` when unknown.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Known(_) => self,
            Self::Unknown => other,
        }
    }

    /// Convert into an `Option`, for the point where a policy decision is made.
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl<T> Default for Detected<T> {
    fn default() -> Self {
        Self::Unknown
    }
}

impl<T> From<Option<T>> for Detected<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl<T: Serialize> Serialize for Detected<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(value) => value.serialize(serializer),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_prefers_known_value() {
        assert_eq!(Detected::Known(1).or(Detected::Known(2)), Detected::Known(1));
        assert_eq!(Detected::Unknown.or(Detected::Known(2)), Detected::Known(2));
        assert_eq!(Detected::<i32>::Unknown.or(Detected::Unknown), Detected::Unknown);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Detected::from(Some("x")), Detected::Known("x"));
        assert_eq!(Detected::<&str>::from(None), Detected::Unknown);
        assert_eq!(Detected::Known(3).known(), Some(3));
        assert_eq!(Detected::<u8>::Unknown.known(), None);
    }

    #[test]
    fn test_and_then_short_circuits_unknown() {
        let parsed = Detected::Known("12").and_then(|s| s.parse::<u32>().ok().into());
        assert_eq!(parsed, Detected::Known(12));

        let bad = Detected::Known("x").and_then(|s| s.parse::<u32>().ok().into());
        assert!(bad.is_unknown());
    }

    #[test]
    fn test_serializes_unknown_as_null() {
        let known = serde_json::to_string(&Detected::Known("cu121")).unwrap();
        let unknown = serde_json::to_string(&Detected::<String>::Unknown).unwrap();
        assert_eq!(known, "\"cu121\"");
        assert_eq!(unknown, "null");
    }
}
