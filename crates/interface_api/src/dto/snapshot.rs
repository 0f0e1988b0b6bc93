//! Snapshot DTOs shared by every endpoint

use chrono::{DateTime, Utc};
use core_kernel::{
    parse_iso_date, AsOf, CertificationId, CompetencyId, CourseId, InsuranceId, OrganizationId,
    StudentId, Timezone,
};
use domain_eligibility::{CertificationRecord, Horizon, InsuranceRecord, OrganizationRef, StudentRef};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Upper bound accepted for any horizon parameter
pub const MAX_HORIZON_DAYS: i64 = 3650;

/// Upper bound accepted for any result limit
pub const MAX_LIMIT: i64 = 1000;

/// The reference instant a request is evaluated at
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Reference {
    /// RFC 3339 instant
    pub as_of: DateTime<Utc>,
    /// IANA timezone; falls back to the configured default
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Reference {
    pub fn resolve(&self, config: &ApiConfig) -> Result<AsOf, ApiError> {
        let name = self.timezone.as_deref().unwrap_or(&config.timezone);
        let timezone =
            Timezone::parse(name).map_err(|e| ApiError::validation("timezone", e.to_string()))?;
        Ok(AsOf::new(self.as_of, timezone))
    }
}

/// Resolves an optional horizon against its configured default
pub fn horizon_or(days: Option<i64>, field: &str, default: Horizon) -> Result<Horizon, ApiError> {
    match days {
        None => Ok(default),
        Some(days) => Horizon::days(days).map_err(|e| ApiError::validation(field, e.to_string())),
    }
}

/// Resolves an optional result limit against its configured default
pub fn limit_or(limit: Option<i64>, field: &str, default: usize) -> Result<usize, ApiError> {
    match limit {
        None => Ok(default),
        Some(limit) => usize::try_from(limit)
            .map_err(|_| ApiError::validation(field, format!("must not be negative, got {limit}"))),
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InsuranceDto {
    #[serde(default)]
    pub id: Option<InsuranceId>,
    pub provider: String,
    pub policy_number: String,
    pub expiration_date: String,
}

impl InsuranceDto {
    pub fn into_record(self, path: &str) -> Result<InsuranceRecord, ApiError> {
        let expiration_date =
            parse_iso_date(format!("{path}.expiration_date"), &self.expiration_date)?;
        Ok(InsuranceRecord {
            id: self.id,
            provider: self.provider,
            policy_number: self.policy_number,
            expiration_date,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CertificationDto {
    #[serde(default)]
    pub id: Option<CertificationId>,
    pub name: String,
    pub issued_date: String,
    /// Absent, null or blank means the certification never expires
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub competency_id: Option<CompetencyId>,
}

impl CertificationDto {
    /// Parses the dates; ordering of issue and expiration is checked by the engine
    pub fn into_record(self, path: &str) -> Result<CertificationRecord, ApiError> {
        let issued_date = parse_iso_date(format!("{path}.issued_date"), &self.issued_date)?;
        let expiration_date = match self.expiration_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_iso_date(format!("{path}.expiration_date"), value)?),
        };
        Ok(CertificationRecord {
            id: self.id,
            name: self.name,
            issued_date,
            expiration_date,
            course_id: self.course_id,
            competency_id: self.competency_id,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudentDto {
    pub id: StudentId,
    pub display_name: String,
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
    #[serde(default)]
    pub insurance: Option<InsuranceDto>,
    #[serde(default)]
    pub certifications: Vec<CertificationDto>,
}

impl StudentDto {
    pub fn into_student(self, index: usize) -> Result<StudentRef, ApiError> {
        let path = format!("students[{index}]");
        let insurance = self
            .insurance
            .map(|insurance| insurance.into_record(&format!("{path}.insurance")))
            .transpose()?;
        let certifications = self
            .certifications
            .into_iter()
            .enumerate()
            .map(|(j, cert)| cert.into_record(&format!("{path}.certifications[{j}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StudentRef {
            id: self.id,
            display_name: self.display_name,
            organization: self.organization_id,
            insurance,
            certifications,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizationDto {
    pub id: OrganizationId,
    pub display_name: String,
    #[serde(default)]
    pub student_count: u32,
}

impl From<OrganizationDto> for OrganizationRef {
    fn from(dto: OrganizationDto) -> Self {
        OrganizationRef::new(dto.id, dto.display_name, dto.student_count)
    }
}

pub fn into_students(students: Vec<StudentDto>) -> Result<Vec<StudentRef>, ApiError> {
    students
        .into_iter()
        .enumerate()
        .map(|(i, student)| student.into_student(i))
        .collect()
}

pub fn into_organizations(organizations: Vec<OrganizationDto>) -> Vec<OrganizationRef> {
    organizations.into_iter().map(OrganizationRef::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(value: serde_json::Value) -> StudentDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_malformed_insurance_date_names_full_path() {
        let dto = student(json!({
            "id": StudentId::new(),
            "display_name": "Sam",
            "insurance": {"provider": "P", "policy_number": "N", "expiration_date": "2024-13-01"}
        }));

        match dto.into_student(4) {
            Err(ApiError::Validation { fields, .. }) => {
                assert_eq!(fields, vec!["students[4].insurance.expiration_date".to_string()]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_blank_certification_expiration_is_permanent() {
        let dto = student(json!({
            "id": StudentId::new(),
            "display_name": "Sam",
            "certifications": [{"name": "Law", "issued_date": "2020-01-01", "expiration_date": " "}]
        }));

        let student = dto.into_student(0).unwrap();
        assert_eq!(student.certifications[0].expiration_date, None);
    }

    #[test]
    fn test_negative_limit_rejected() {
        assert!(limit_or(Some(-1), "limit", 3).is_err());
        assert_eq!(limit_or(None, "limit", 3).unwrap(), 3);
    }

    #[test]
    fn test_reference_uses_configured_timezone() {
        let reference: Reference = serde_json::from_value(json!({"as_of": "2024-01-31T03:00:00Z"})).unwrap();
        let config = ApiConfig {
            timezone: "America/Los_Angeles".to_string(),
            ..ApiConfig::default()
        };

        let as_of = reference.resolve(&config).unwrap();
        assert_eq!(as_of.date().to_string(), "2024-01-30");
    }
}
