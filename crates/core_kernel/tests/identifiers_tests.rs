//! Tests for the identifier newtypes
//!
//! Covers creation, parsing, ordering and serialization of the ids used
//! across the training records system.

use core_kernel::{
    StudentId, OrganizationId, InsuranceId, CertificationId,
    CourseId, CompetencyId,
};
use uuid::Uuid;

mod student_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = StudentId::new();
        let id2 = StudentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = StudentId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = StudentId::new_v7();
        assert!(id1 < id2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = StudentId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_display_format() {
        let id = StudentId::new();
        assert!(id.to_string().starts_with("STU-"));
    }

    #[test]
    fn test_from_str_with_and_without_prefix() {
        let original = StudentId::new();
        let prefixed: StudentId = original.to_string().parse().unwrap();
        let bare: StudentId = original.as_uuid().to_string().parse().unwrap();

        assert_eq!(original, prefixed);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        let result: Result<StudentId, _> = "STU-not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_json_is_transparent() {
        let uuid = Uuid::from_u128(0x2a);
        let id = StudentId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, format!("\"{}\"", uuid));
        let back: StudentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn test_sorting_matches_string_order() {
        let mut ids: Vec<StudentId> = (0..20).map(|_| StudentId::new()).collect();
        let mut strings: Vec<String> = ids.iter().map(|id| id.as_uuid().to_string()).collect();

        ids.sort();
        strings.sort();

        let sorted: Vec<String> = ids.iter().map(|id| id.as_uuid().to_string()).collect();
        assert_eq!(sorted, strings);
    }
}

mod prefix_tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(StudentId::prefix(), "STU");
        assert_eq!(OrganizationId::prefix(), "ORG");
        assert_eq!(InsuranceId::prefix(), "INS");
        assert_eq!(CertificationId::prefix(), "CERT");
        assert_eq!(CourseId::prefix(), "CRS");
        assert_eq!(CompetencyId::prefix(), "CMP");
    }

    #[test]
    fn test_prefix_of_other_type_is_not_stripped() {
        let org = OrganizationId::new();
        let result: Result<StudentId, _> = org.to_string().parse();
        assert!(result.is_err());
    }
}
