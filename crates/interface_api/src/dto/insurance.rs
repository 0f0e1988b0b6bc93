//! Insurance DTOs

use domain_eligibility::{InsuranceFilter, StudentRef};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::snapshot::{InsuranceDto, MAX_HORIZON_DAYS, MAX_LIMIT, Reference, StudentDto};

#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyInsuranceRequest {
    #[serde(flatten)]
    pub reference: Reference,
    /// Absent means no insurance on file
    #[serde(default)]
    pub insurance: Option<InsuranceDto>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InsuranceRosterRequest {
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default)]
    pub students: Vec<StudentDto>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UrgentInsuranceRequest {
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default)]
    pub students: Vec<StudentDto>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
    #[validate(range(min = 0, max = MAX_LIMIT))]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FilterInsuranceRequest {
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default)]
    pub students: Vec<StudentDto>,
    #[serde(default)]
    pub filter: InsuranceFilter,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FilterInsuranceResponse {
    pub filter: InsuranceFilter,
    pub count: usize,
    pub students: Vec<StudentRef>,
}
