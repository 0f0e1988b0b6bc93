//! Snapshot records consumed by the engine
//!
//! These are read-only views of what the data store holds. The engine never
//! mutates or persists them; it validates them at the boundary of every
//! call and then classifies them.

use std::collections::HashSet;

use chrono::NaiveDate;
use core_kernel::{
    parse_iso_date, CertificationId, CompetencyId, CourseId, InsuranceId, OrganizationId,
    StudentId,
};
use serde::{Deserialize, Serialize};

use crate::error::{EligibilityError, EligibilityResult};

/// A record with an optional expiration date
///
/// Implemented by both insurance and certification records so the same
/// classification rules apply to each.
pub trait Expiring {
    /// Date the record stops being valid; `None` means it never expires
    fn expiration_date(&self) -> Option<NaiveDate>;
}

/// Carry insurance held by a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InsuranceId>,
    pub provider: String,
    pub policy_number: String,
    pub expiration_date: NaiveDate,
}

impl InsuranceRecord {
    pub fn new(
        provider: impl Into<String>,
        policy_number: impl Into<String>,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            provider: provider.into(),
            policy_number: policy_number.into(),
            expiration_date,
        }
    }

    /// Builds a record from the ISO date string the data store returns
    pub fn from_iso(
        provider: impl Into<String>,
        policy_number: impl Into<String>,
        expiration_date: &str,
    ) -> EligibilityResult<Self> {
        let expiration_date = parse_iso_date("expiration_date", expiration_date)?;
        Ok(Self::new(provider, policy_number, expiration_date))
    }

    pub fn with_id(mut self, id: InsuranceId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Expiring for InsuranceRecord {
    fn expiration_date(&self) -> Option<NaiveDate> {
        Some(self.expiration_date)
    }
}

/// A certification issued to a student, optionally for a course or competency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CertificationId>,
    pub name: String,
    pub issued_date: NaiveDate,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competency_id: Option<CompetencyId>,
}

impl CertificationRecord {
    /// Creates a certification, rejecting an expiration before issuance
    pub fn new(
        name: impl Into<String>,
        issued_date: NaiveDate,
        expiration_date: Option<NaiveDate>,
    ) -> EligibilityResult<Self> {
        let record = Self {
            id: None,
            name: name.into(),
            issued_date,
            expiration_date,
            course_id: None,
            competency_id: None,
        };
        record.validate("certification")?;
        Ok(record)
    }

    /// Creates a certification that never expires
    pub fn permanent(name: impl Into<String>, issued_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            issued_date,
            expiration_date: None,
            course_id: None,
            competency_id: None,
        }
    }

    /// Builds a record from ISO date strings; an empty expiration means none
    pub fn from_iso(
        name: impl Into<String>,
        issued_date: &str,
        expiration_date: Option<&str>,
    ) -> EligibilityResult<Self> {
        let issued_date = parse_iso_date("issued_date", issued_date)?;
        let expiration_date = match expiration_date.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_iso_date("expiration_date", value)?),
        };
        Self::new(name, issued_date, expiration_date)
    }

    pub fn with_id(mut self, id: CertificationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn for_course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn for_competency(mut self, competency_id: CompetencyId) -> Self {
        self.competency_id = Some(competency_id);
        self
    }

    /// Checks the record's invariants; `path` prefixes the reported field
    pub fn validate(&self, path: &str) -> EligibilityResult<()> {
        if let Some(expiration) = self.expiration_date {
            if expiration < self.issued_date {
                return Err(EligibilityError::validation(
                    format!("{path}.expiration_date"),
                    format!(
                        "expiration {} is before issue date {}",
                        expiration, self.issued_date
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl Expiring for CertificationRecord {
    fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }
}

/// A student as seen by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    pub id: StudentId,
    pub display_name: String,
    #[serde(default)]
    pub organization: Option<OrganizationId>,
    #[serde(default)]
    pub insurance: Option<InsuranceRecord>,
    #[serde(default)]
    pub certifications: Vec<CertificationRecord>,
}

impl StudentRef {
    pub fn new(id: StudentId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            organization: None,
            insurance: None,
            certifications: Vec::new(),
        }
    }

    pub fn with_organization(mut self, organization: OrganizationId) -> Self {
        self.organization = Some(organization);
        self
    }

    pub fn with_insurance(mut self, insurance: InsuranceRecord) -> Self {
        self.insurance = Some(insurance);
        self
    }

    pub fn with_certification(mut self, certification: CertificationRecord) -> Self {
        self.certifications.push(certification);
        self
    }
}

/// An organization students can belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub id: OrganizationId,
    pub display_name: String,
    #[serde(default)]
    pub student_count: u32,
}

impl OrganizationRef {
    pub fn new(id: OrganizationId, display_name: impl Into<String>, student_count: u32) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            student_count,
        }
    }
}

/// Validates a student snapshot, failing on the first offending field
///
/// Student ids must be unique and every certification must satisfy its
/// own invariants.
pub fn validate_students(students: &[StudentRef]) -> EligibilityResult<()> {
    let mut seen = HashSet::with_capacity(students.len());
    for (i, student) in students.iter().enumerate() {
        if !seen.insert(student.id) {
            return Err(EligibilityError::validation(
                format!("students[{i}].id"),
                format!("duplicate student id {}", student.id),
            ));
        }
        for (j, certification) in student.certifications.iter().enumerate() {
            certification.validate(&format!("students[{i}].certifications[{j}]"))?;
        }
    }
    Ok(())
}

/// Validates an organization snapshot; ids must be unique
pub fn validate_organizations(organizations: &[OrganizationRef]) -> EligibilityResult<()> {
    let mut seen = HashSet::with_capacity(organizations.len());
    for (i, organization) in organizations.iter().enumerate() {
        if !seen.insert(organization.id) {
            return Err(EligibilityError::validation(
                format!("organizations[{i}].id"),
                format!("duplicate organization id {}", organization.id),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_certification_rejects_expiry_before_issue() {
        let err = CertificationRecord::new("Handgun", date(2024, 5, 1), Some(date(2024, 4, 30)))
            .unwrap_err();
        assert_eq!(err.field(), "certification.expiration_date");
    }

    #[test]
    fn test_certification_same_day_expiry_is_allowed() {
        assert!(CertificationRecord::new("Handgun", date(2024, 5, 1), Some(date(2024, 5, 1))).is_ok());
    }

    #[test]
    fn test_from_iso_blank_expiration_is_permanent() {
        let cert = CertificationRecord::from_iso("Range Safety", "2023-01-01", Some("  ")).unwrap();
        assert_eq!(cert.expiration_date, None);
    }

    #[test]
    fn test_insurance_from_iso_names_field() {
        let err = InsuranceRecord::from_iso("Acme", "P-1", "2024/01/01").unwrap_err();
        assert_eq!(err.field(), "expiration_date");
    }

    #[test]
    fn test_validate_students_reports_nested_path() {
        let mut bad = CertificationRecord::permanent("Rifle", date(2024, 1, 10));
        bad.expiration_date = Some(date(2024, 1, 1));

        let students = vec![
            StudentRef::new(StudentId::new(), "A"),
            StudentRef::new(StudentId::new(), "B")
                .with_certification(CertificationRecord::permanent("Pistol", date(2023, 1, 1)))
                .with_certification(bad),
        ];

        let err = validate_students(&students).unwrap_err();
        assert_eq!(err.field(), "students[1].certifications[1].expiration_date");
    }
}
