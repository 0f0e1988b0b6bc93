//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating snapshots that satisfy the
//! engine's input invariants: unique ids and certifications that never
//! expire before they were issued.

use chrono::{Days, NaiveDate};
use core_kernel::{AsOf, OrganizationId, StudentId};
use domain_eligibility::{CertificationRecord, InsuranceRecord, OrganizationRef, StudentRef};
use proptest::prelude::*;
use uuid::Uuid;

use crate::fixtures::TemporalFixtures;

/// Dates within roughly a year either side of the reference date
pub fn date_near_reference_strategy() -> impl Strategy<Value = NaiveDate> {
    (-400i64..400i64).prop_map(|offset| {
        let base = TemporalFixtures::reference_date();
        if offset >= 0 {
            base + Days::new(offset as u64)
        } else {
            base - Days::new(offset.unsigned_abs())
        }
    })
}

/// Reference instants spread over 2024
pub fn as_of_2024_strategy() -> impl Strategy<Value = AsOf> {
    (0u64..366u64).prop_map(|days| AsOf::on(TemporalFixtures::reference_date() + Days::new(days)))
}

/// Horizons from zero to a quarter year
pub fn horizon_days_strategy() -> impl Strategy<Value = u32> {
    0u32..=90u32
}

pub fn insurance_strategy() -> impl Strategy<Value = InsuranceRecord> {
    (date_near_reference_strategy(), "[A-Z]{3}-[0-9]{4}").prop_map(|(expires, policy)| {
        InsuranceRecord::new("Generated Mutual", policy, expires)
    })
}

/// Certifications with an expiration on or after the issue date, or none
pub fn certification_strategy() -> impl Strategy<Value = CertificationRecord> {
    (
        date_near_reference_strategy(),
        proptest::option::of(0u64..1500u64),
        "[A-Z][a-z]{3,10}",
    )
        .prop_map(|(issued, validity_days, name)| {
            let expires = validity_days.map(|d| issued + Days::new(d));
            CertificationRecord::new(name, issued, expires).expect("generated valid certification")
        })
}

/// A roster of students with distinct ids, spread over `organizations`
pub fn roster_strategy(
    max_students: usize,
    organizations: Vec<OrganizationId>,
) -> impl Strategy<Value = Vec<StudentRef>> {
    let org_count = organizations.len();
    proptest::collection::vec(
        (
            proptest::option::of(insurance_strategy()),
            proptest::collection::vec(certification_strategy(), 0..4),
            any::<usize>(),
        ),
        0..=max_students,
    )
    .prop_map(move |entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (insurance, certifications, pick))| {
                let organization = if org_count == 0 || pick % 3 == 0 {
                    None
                } else {
                    Some(organizations[pick % org_count])
                };
                StudentRef {
                    id: StudentId::from_uuid(Uuid::from_u128(i as u128 + 1)),
                    display_name: format!("Student {i}"),
                    organization,
                    insurance,
                    certifications,
                }
            })
            .collect()
    })
}

/// A fixed set of organizations to attach generated students to
pub fn organizations(count: usize) -> Vec<OrganizationRef> {
    (0..count)
        .map(|i| {
            OrganizationRef::new(
                OrganizationId::from_uuid(Uuid::from_u128(0xff00 + i as u128)),
                format!("Organization {i}"),
                10,
            )
        })
        .collect()
}
