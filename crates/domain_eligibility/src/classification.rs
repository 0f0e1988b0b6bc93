//! Validity classification of insurance and certification records
//!
//! A record is classified on the calendar date of the reference instant:
//!
//! ```text
//!            expired             expiring soon             valid
//! ----------------------]|-----------------------|-------------------->
//!                     today                today + horizon
//! ```
//!
//! - expiration on or before today: `Expired` (expiring today counts)
//! - expiration in `(today, today + horizon)`: `ExpiringSoon`
//! - expiration on `today + horizon` or later: `Valid`
//! - no expiration date: `Valid`; no record at all: `Missing`

use core_kernel::AsOf;
use serde::{Deserialize, Serialize};

use crate::error::{EligibilityError, EligibilityResult};
use crate::records::{CertificationRecord, Expiring, InsuranceRecord};

/// Number of days ahead that counts as "expiring soon"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Horizon(u32);

impl Horizon {
    pub const DEFAULT_DAYS: u32 = 30;

    /// Creates a horizon, rejecting negative or oversized values
    pub fn days(days: i64) -> EligibilityResult<Self> {
        if days < 0 {
            return Err(EligibilityError::validation(
                "horizon_days",
                format!("must not be negative, got {days}"),
            ));
        }
        u32::try_from(days)
            .map(Horizon)
            .map_err(|_| EligibilityError::validation("horizon_days", format!("{days} is too large")))
    }

    pub const fn from_days(days: u32) -> Self {
        Horizon(days)
    }

    pub fn as_days(&self) -> u32 {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon(Self::DEFAULT_DAYS)
    }
}

impl TryFrom<i64> for Horizon {
    type Error = EligibilityError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Horizon::days(days)
    }
}

impl From<Horizon> for i64 {
    fn from(horizon: Horizon) -> i64 {
        i64::from(horizon.0)
    }
}

/// Validity state of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Missing,
}

impl ValidityStatus {
    /// Whether the record belongs on a renewal worklist
    pub fn needs_attention(&self) -> bool {
        matches!(self, ValidityStatus::ExpiringSoon | ValidityStatus::Expired)
    }
}

/// Result of classifying one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification<R> {
    pub status: ValidityStatus,
    /// The record the status was computed from; `None` only for `Missing`
    pub record: Option<R>,
    /// Days left until expiration (`Valid` with a date, `ExpiringSoon`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until: Option<i64>,
    /// Days since expiration, `0` when it expired today (`Expired`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since: Option<i64>,
}

impl<R> Classification<R> {
    fn missing() -> Self {
        Self {
            status: ValidityStatus::Missing,
            record: None,
            days_until: None,
            days_since: None,
        }
    }

    /// Signed days until expiration; negative once expired
    pub fn signed_days(&self) -> Option<i64> {
        self.days_until.or(self.days_since.map(|d| -d))
    }
}

/// Classifies any record with an optional expiration date
pub fn classify<R>(as_of: &AsOf, record: Option<&R>, horizon: Horizon) -> Classification<R>
where
    R: Expiring + Clone,
{
    let Some(record) = record else {
        return Classification::missing();
    };

    let Some(expiration) = record.expiration_date() else {
        return Classification {
            status: ValidityStatus::Valid,
            record: Some(record.clone()),
            days_until: None,
            days_since: None,
        };
    };

    let days = as_of.days_until(expiration);
    let (status, days_until, days_since) = if days <= 0 {
        (ValidityStatus::Expired, None, Some(-days))
    } else if days < i64::from(horizon.as_days()) {
        (ValidityStatus::ExpiringSoon, Some(days), None)
    } else {
        (ValidityStatus::Valid, Some(days), None)
    };

    Classification {
        status,
        record: Some(record.clone()),
        days_until,
        days_since,
    }
}

/// Classifies a student's insurance; `None` means no insurance on file
pub fn classify_insurance(
    as_of: &AsOf,
    record: Option<&InsuranceRecord>,
    horizon: Horizon,
) -> Classification<InsuranceRecord> {
    classify(as_of, record, horizon)
}

/// Classifies a certification after checking its date invariant
pub fn classify_certification(
    as_of: &AsOf,
    record: &CertificationRecord,
    horizon: Horizon,
) -> EligibilityResult<Classification<CertificationRecord>> {
    record.validate("certification")?;
    Ok(classify(as_of, Some(record), horizon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn insurance(expires: NaiveDate) -> InsuranceRecord {
        InsuranceRecord::new("Acme Mutual", "CCW-100", expires)
    }

    #[test]
    fn test_boundaries_around_thirty_day_horizon() {
        let as_of = AsOf::on(date(2024, 1, 1));
        let horizon = Horizon::default();

        let today = classify_insurance(&as_of, Some(&insurance(date(2024, 1, 1))), horizon);
        assert_eq!(today.status, ValidityStatus::Expired);
        assert_eq!(today.days_since, Some(0));

        let last_day = classify_insurance(&as_of, Some(&insurance(date(2024, 1, 30))), horizon);
        assert_eq!(last_day.status, ValidityStatus::ExpiringSoon);
        assert_eq!(last_day.days_until, Some(29));

        let edge = classify_insurance(&as_of, Some(&insurance(date(2024, 1, 31))), horizon);
        assert_eq!(edge.status, ValidityStatus::Valid);
        assert_eq!(edge.days_until, Some(30));
    }

    #[test]
    fn test_zero_horizon_never_expiring_soon() {
        let as_of = AsOf::on(date(2024, 1, 1));
        let c = classify_insurance(&as_of, Some(&insurance(date(2024, 1, 2))), Horizon::from_days(0));
        assert_eq!(c.status, ValidityStatus::Valid);
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let err = Horizon::days(-1).unwrap_err();
        assert_eq!(err.field(), "horizon_days");
    }

    #[test]
    fn test_signed_days() {
        let as_of = AsOf::on(date(2024, 1, 15));
        let c = classify_insurance(&as_of, Some(&insurance(date(2023, 12, 1))), Horizon::default());
        assert_eq!(c.signed_days(), Some(-45));
    }
}
