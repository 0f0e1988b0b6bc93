//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the eligibility engine and the API.
//! Everything here is deterministic: fixed dates, fixed ids, fixed names.

use chrono::NaiveDate;
use core_kernel::{AsOf, OrganizationId, StudentId};
use domain_eligibility::{CertificationRecord, InsuranceRecord, OrganizationRef, StudentRef};
use serde_json::{json, Value};
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Builds a calendar date, panicking on impossible input
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    /// Standard reference date (Jan 1, 2024)
    pub fn reference_date() -> NaiveDate {
        Self::date(2024, 1, 1)
    }

    /// Reference instant at midnight UTC on the reference date
    pub fn as_of() -> AsOf {
        AsOf::on(Self::reference_date())
    }

    /// Reference instant at midnight UTC on the given date
    pub fn as_of_date(year: i32, month: u32, day: u32) -> AsOf {
        AsOf::on(Self::date(year, month, day))
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic student id; higher `n` sorts later
    pub fn student_id(n: u128) -> StudentId {
        StudentId::from_uuid(Uuid::from_u128(0x5000_0000_0000_0000_0000_0000_0000_0000 + n))
    }

    /// Deterministic organization id; higher `n` sorts later
    pub fn organization_id(n: u128) -> OrganizationId {
        OrganizationId::from_uuid(Uuid::from_u128(0x0a00_0000_0000_0000_0000_0000_0000_0000 + n))
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn provider() -> &'static str {
        "US LawShield"
    }

    pub fn policy_number() -> &'static str {
        "CCW-2024-0001"
    }

    pub fn handgun_certification() -> &'static str {
        "Concealed Carry Handgun"
    }

    pub fn range_safety_certification() -> &'static str {
        "Range Safety Officer"
    }
}

/// The three-student roster from the insurance scenarios
///
/// - S1: insurance expired on 2023-12-01
/// - S2: insurance expiring on 2024-01-20
/// - S3: no insurance on file
pub struct RosterFixtures;

impl RosterFixtures {
    pub fn expired_student() -> StudentRef {
        StudentRef::new(IdFixtures::student_id(1), "Sam Expired").with_insurance(
            InsuranceRecord::new(
                StringFixtures::provider(),
                "CCW-S1",
                TemporalFixtures::date(2023, 12, 1),
            ),
        )
    }

    pub fn expiring_student() -> StudentRef {
        StudentRef::new(IdFixtures::student_id(2), "Sky Expiring").with_insurance(
            InsuranceRecord::new(
                StringFixtures::provider(),
                "CCW-S2",
                TemporalFixtures::date(2024, 1, 20),
            ),
        )
    }

    pub fn uninsured_student() -> StudentRef {
        StudentRef::new(IdFixtures::student_id(3), "Sage Uninsured")
    }

    pub fn insurance_roster() -> Vec<StudentRef> {
        vec![
            Self::expired_student(),
            Self::expiring_student(),
            Self::uninsured_student(),
        ]
    }

    /// Org A renews on 2024-02-01, Org B on 2024-01-20, as of 2024-01-10
    pub fn two_organization_roster() -> (Vec<StudentRef>, Vec<OrganizationRef>) {
        let org_a = OrganizationRef::new(IdFixtures::organization_id(1), "Org A", 12);
        let org_b = OrganizationRef::new(IdFixtures::organization_id(2), "Org B", 4);

        let students = vec![
            StudentRef::new(IdFixtures::student_id(10), "Alex A")
                .with_organization(org_a.id)
                .with_certification(certification(
                    StringFixtures::handgun_certification(),
                    TemporalFixtures::date(2022, 2, 1),
                    TemporalFixtures::date(2024, 2, 1),
                )),
            StudentRef::new(IdFixtures::student_id(11), "Blair B")
                .with_organization(org_b.id)
                .with_certification(certification(
                    StringFixtures::range_safety_certification(),
                    TemporalFixtures::date(2023, 1, 20),
                    TemporalFixtures::date(2024, 1, 20),
                )),
        ];

        (students, vec![org_a, org_b])
    }
}

fn certification(name: &str, issued: NaiveDate, expires: NaiveDate) -> CertificationRecord {
    CertificationRecord::new(name, issued, Some(expires)).expect("valid fixture certification")
}

/// JSON request bodies in the shape the API accepts
pub struct SnapshotFixtures;

impl SnapshotFixtures {
    /// Student JSON with ISO date strings
    pub fn student_json(
        id: StudentId,
        name: &str,
        organization: Option<OrganizationId>,
        insurance_expires: Option<&str>,
        certifications: &[(&str, &str, Option<&str>)],
    ) -> Value {
        json!({
            "id": id,
            "display_name": name,
            "organization_id": organization,
            "insurance": insurance_expires.map(|expires| json!({
                "provider": StringFixtures::provider(),
                "policy_number": StringFixtures::policy_number(),
                "expiration_date": expires,
            })),
            "certifications": certifications
                .iter()
                .map(|(name, issued, expires)| json!({
                    "name": name,
                    "issued_date": issued,
                    "expiration_date": expires,
                }))
                .collect::<Vec<_>>(),
        })
    }

    /// The insurance roster as a JSON array
    pub fn insurance_roster_json() -> Value {
        json!([
            Self::student_json(IdFixtures::student_id(1), "Sam Expired", None, Some("2023-12-01"), &[]),
            Self::student_json(IdFixtures::student_id(2), "Sky Expiring", None, Some("2024-01-20"), &[]),
            Self::student_json(IdFixtures::student_id(3), "Sage Uninsured", None, None, &[]),
        ])
    }
}
