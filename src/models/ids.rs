//! Strongly-typed ID wrappers for trips and activities
//!
//! IDs are random UUIDs, so two entities created in the same millisecond
//! still get distinct identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short display prefix for this ID type
            pub const fn prefix() -> &'static str {
                $display_prefix
            }

            /// Check whether a user-supplied identifier refers to this ID
            ///
            /// Accepts the full UUID, the prefixed short form shown in
            /// listings, or any unambiguous leading part of the UUID.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim().to_lowercase();
                let identifier = identifier
                    .strip_prefix($display_prefix)
                    .unwrap_or(identifier.as_str());
                identifier.len() >= 4 && self.0.to_string().starts_with(identifier)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TripId, "trip-");
define_id!(ActivityId, "act-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TripId::new();
        let display = id.to_string();
        assert!(display.starts_with("trip-"));
        assert_eq!(display.len(), 13);

        let id = ActivityId::new();
        assert!(id.to_string().starts_with("act-"));
    }

    #[test]
    fn test_ids_unique_in_tight_loop() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| TripId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TripId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: TripId = format!("trip-{}", uuid_str).parse().unwrap();
        assert_eq!(id, prefixed);

        assert!("not-a-uuid".parse::<ActivityId>().is_err());
    }

    #[test]
    fn test_matches_short_form() {
        let id: TripId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.matches("trip-550e8400"));
        assert!(id.matches("550e8400"));
        assert!(id.matches("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!id.matches("trip-"));
        assert!(!id.matches("550"));
        assert!(!id.matches("trip-660e8400"));
    }

    #[test]
    fn test_id_serialization() {
        let id = ActivityId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ActivityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
