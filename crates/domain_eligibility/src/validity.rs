//! Competency validity periods
//!
//! A competency is valid for a number of calendar months after issue when
//! recertification is required. Month arithmetic clamps to the end of the
//! month, so a certification issued on Jan 31 with a one month validity
//! expires on the last day of February.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EligibilityError, EligibilityResult};
use crate::records::CertificationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPolicy {
    pub validity_months: u32,
    pub recertification_required: bool,
}

impl ValidityPolicy {
    pub fn new(validity_months: u32, recertification_required: bool) -> EligibilityResult<Self> {
        let policy = Self {
            validity_months,
            recertification_required,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// A policy for competencies that never need recertification
    pub fn non_expiring() -> Self {
        Self {
            validity_months: 0,
            recertification_required: false,
        }
    }

    pub fn validate(&self) -> EligibilityResult<()> {
        if self.recertification_required && self.validity_months == 0 {
            return Err(EligibilityError::validation(
                "validity_months",
                "must be positive when recertification is required",
            ));
        }
        Ok(())
    }

    /// Expiration date for a certification issued on `issued`
    pub fn expiration_for(&self, issued: NaiveDate) -> EligibilityResult<Option<NaiveDate>> {
        self.validate()?;
        if !self.recertification_required {
            return Ok(None);
        }
        issued
            .checked_add_months(Months::new(self.validity_months))
            .map(Some)
            .ok_or_else(|| {
                EligibilityError::validation(
                    "validity_months",
                    format!("{} months after {} is out of range", self.validity_months, issued),
                )
            })
    }
}

impl CertificationRecord {
    /// Issues a certification whose expiration follows `policy`
    pub fn issue(
        name: impl Into<String>,
        issued_date: NaiveDate,
        policy: &ValidityPolicy,
    ) -> EligibilityResult<Self> {
        let expiration_date = policy.expiration_for(issued_date)?;
        CertificationRecord::new(name, issued_date, expiration_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_end_clamps() {
        let policy = ValidityPolicy::new(1, true).unwrap();
        assert_eq!(policy.expiration_for(date(2024, 1, 31)).unwrap(), Some(date(2024, 2, 29)));
        assert_eq!(policy.expiration_for(date(2023, 1, 31)).unwrap(), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_no_recertification_never_expires() {
        let policy = ValidityPolicy::new(24, false).unwrap();
        assert_eq!(policy.expiration_for(date(2024, 6, 1)).unwrap(), None);
    }

    #[test]
    fn test_zero_months_with_recertification_rejected() {
        assert!(ValidityPolicy::new(0, true).is_err());
    }

    #[test]
    fn test_expiration_past_calendar_end_rejected() {
        let policy = ValidityPolicy::new(12, true).unwrap();
        let err = policy.expiration_for(NaiveDate::MAX - chrono::Days::new(30)).unwrap_err();

        assert_eq!(err.field(), "validity_months");
        assert!(CertificationRecord::issue("Handgun", NaiveDate::MAX, &policy).is_err());
    }
}
