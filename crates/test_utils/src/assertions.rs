//! Custom Test Assertions
//!
//! Provides assertion helpers for classification results and worklists
//! that give more meaningful failure messages than bare `assert_eq!`.

use chrono::NaiveDate;
use domain_eligibility::{
    Classification, InsuranceSummary, RenewalWorklist, UrgentInsuranceCase, ValidityStatus,
};

/// Asserts the status and the days reported alongside it
///
/// `signed_days` is negative for expired records, `None` when the record
/// is missing or never expires.
pub fn assert_classified<R: std::fmt::Debug>(
    classification: &Classification<R>,
    status: ValidityStatus,
    signed_days: Option<i64>,
) {
    assert_eq!(
        classification.status, status,
        "Unexpected status for {:?}",
        classification
    );
    assert_eq!(
        classification.signed_days(),
        signed_days,
        "Unexpected day count for {:?}",
        classification
    );
}

/// Asserts that the summary buckets partition `total` students
pub fn assert_summary_partitions(summary: &InsuranceSummary, total: usize) {
    assert_eq!(
        summary.total_students(),
        total,
        "Summary buckets {:?} do not add up to {} students",
        summary,
        total
    );
    assert!(
        summary.valid_percentage <= 100,
        "Percentage out of range: {}",
        summary.valid_percentage
    );
}

/// Asserts urgent cases are ordered by expiration date, then student id
pub fn assert_urgent_cases_ordered(cases: &[UrgentInsuranceCase]) {
    for pair in cases.windows(2) {
        let key_a = (pair[0].expiration_date, pair[0].student.id);
        let key_b = (pair[1].expiration_date, pair[1].student.id);
        assert!(
            key_a < key_b,
            "Urgent cases out of order: {:?} before {:?}",
            key_a,
            key_b
        );
    }
}

/// Asserts both halves of a worklist are sorted most urgent first
pub fn assert_worklist_ordered(worklist: &RenewalWorklist) {
    for pair in worklist.student_renewals.windows(2) {
        let key_a = (pair[0].days_until_expiration, pair[0].student.id);
        let key_b = (pair[1].days_until_expiration, pair[1].student.id);
        assert!(key_a < key_b, "Student renewals out of order: {:?} before {:?}", key_a, key_b);
    }
    for pair in worklist.organization_renewals.windows(2) {
        let key_a: (NaiveDate, _) = (pair[0].next_renewal_date, pair[0].organization.id);
        let key_b: (NaiveDate, _) = (pair[1].next_renewal_date, pair[1].organization.id);
        assert!(
            key_a < key_b,
            "Organization renewals out of order: {:?} before {:?}",
            key_a,
            key_b
        );
    }
}
