//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs keep student, organization and record ids
//! from being mixed up. Identifiers are totally ordered; the order matches
//! the lowercase hyphenated string form, which is what worklists use to
//! break ties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// People and organizations
define_id!(StudentId, "STU");
define_id!(OrganizationId, "ORG");

// Records held against a student
define_id!(InsuranceId, "INS");
define_id!(CertificationId, "CERT");

// Catalogue entries a certification can be issued for
define_id!(CourseId, "CRS");
define_id!(CompetencyId, "CMP");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_display() {
        let id = StudentId::new();
        assert!(id.to_string().starts_with("STU-"));
    }

    #[test]
    fn test_id_parsing() {
        let original = OrganizationId::new();
        let parsed: OrganizationId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_ordering_follows_uuid_bytes() {
        let low = StudentId::from_uuid(Uuid::from_u128(1));
        let high = StudentId::from_uuid(Uuid::from_u128(2));
        assert!(low < high);
        assert!(low.as_uuid().to_string() < high.as_uuid().to_string());
    }
}
