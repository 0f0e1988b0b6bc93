//! Insurance coverage across a student roster
//!
//! Summary counts for the dashboard card, the ranked list of urgent cases,
//! and the status filter used by the insurance list.

use chrono::NaiveDate;
use core_kernel::AsOf;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::classification::{classify_insurance, Horizon, ValidityStatus};
use crate::error::EligibilityResult;
use crate::records::{validate_students, StudentRef};

/// How many urgent cases the dashboard shows by default
pub const DEFAULT_URGENT_LIMIT: usize = 3;

/// Insurance status counts; the four buckets partition the roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceSummary {
    pub valid_count: usize,
    pub expiring_count: usize,
    pub expired_count: usize,
    pub missing_count: usize,
    /// Share of students with valid insurance, rounded half up; 0 for an empty roster
    pub valid_percentage: u8,
}

impl InsuranceSummary {
    pub fn total_students(&self) -> usize {
        self.valid_count + self.expiring_count + self.expired_count + self.missing_count
    }

    fn record(&mut self, status: ValidityStatus) {
        match status {
            ValidityStatus::Valid => self.valid_count += 1,
            ValidityStatus::ExpiringSoon => self.expiring_count += 1,
            ValidityStatus::Expired => self.expired_count += 1,
            ValidityStatus::Missing => self.missing_count += 1,
        }
    }
}

/// Rounds `part / total * 100` half up using integer arithmetic
pub(crate) fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (part * 200 + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Counts students per insurance status
#[instrument(skip_all, fields(students = students.len(), horizon = horizon.as_days()))]
pub fn compute_insurance_summary(
    as_of: &AsOf,
    students: &[StudentRef],
    horizon: Horizon,
) -> EligibilityResult<InsuranceSummary> {
    validate_students(students)?;

    let mut summary = InsuranceSummary::default();
    for student in students {
        let classification = classify_insurance(as_of, student.insurance.as_ref(), horizon);
        summary.record(classification.status);
    }
    summary.valid_percentage = percentage(summary.valid_count, students.len());

    debug!(
        valid = summary.valid_count,
        expiring = summary.expiring_count,
        expired = summary.expired_count,
        missing = summary.missing_count,
        "Computed insurance summary"
    );
    Ok(summary)
}

/// A student whose insurance has lapsed or is about to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgentInsuranceCase {
    pub student: StudentRef,
    pub status: ValidityStatus,
    pub expiration_date: NaiveDate,
    /// Signed days until expiration; negative once expired
    pub days_until_expiration: i64,
}

/// Ranks expired and expiring-soon insurance, soonest expiration first
///
/// Ties on the expiration date are broken by student id so identical
/// input always yields identical output.
#[instrument(skip_all, fields(students = students.len(), limit = limit))]
pub fn rank_urgent_insurance_cases(
    as_of: &AsOf,
    students: &[StudentRef],
    horizon: Horizon,
    limit: usize,
) -> EligibilityResult<Vec<UrgentInsuranceCase>> {
    validate_students(students)?;

    let mut cases: Vec<UrgentInsuranceCase> = students
        .iter()
        .filter_map(|student| {
            let insurance = student.insurance.as_ref()?;
            let classification = classify_insurance(as_of, Some(insurance), horizon);
            classification.status.needs_attention().then(|| UrgentInsuranceCase {
                student: student.clone(),
                status: classification.status,
                expiration_date: insurance.expiration_date,
                days_until_expiration: as_of.days_until(insurance.expiration_date),
            })
        })
        .collect();

    let candidates = cases.len();
    cases.sort_by(|a, b| {
        a.expiration_date
            .cmp(&b.expiration_date)
            .then_with(|| a.student.id.cmp(&b.student.id))
    });
    cases.truncate(limit);

    debug!(candidates, returned = cases.len(), "Ranked urgent insurance cases");
    Ok(cases)
}

/// Insurance list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceFilter {
    #[default]
    All,
    Valid,
    Expiring,
    Expired,
    Missing,
}

impl InsuranceFilter {
    pub fn matches(&self, status: ValidityStatus) -> bool {
        match self {
            InsuranceFilter::All => true,
            InsuranceFilter::Valid => status == ValidityStatus::Valid,
            InsuranceFilter::Expiring => status == ValidityStatus::ExpiringSoon,
            InsuranceFilter::Expired => status == ValidityStatus::Expired,
            InsuranceFilter::Missing => status == ValidityStatus::Missing,
        }
    }
}

/// Students whose insurance status matches `filter`, in input order
pub fn filter_by_insurance_status<'a>(
    as_of: &AsOf,
    students: &'a [StudentRef],
    filter: InsuranceFilter,
    horizon: Horizon,
) -> EligibilityResult<Vec<&'a StudentRef>> {
    validate_students(students)?;

    Ok(students
        .iter()
        .filter(|student| {
            let status = classify_insurance(as_of, student.insurance.as_ref(), horizon).status;
            filter.matches(status)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(1, 201), 0);
        assert_eq!(percentage(5, 5), 100);
    }
}
