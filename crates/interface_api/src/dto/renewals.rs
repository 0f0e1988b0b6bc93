//! Renewal and dashboard DTOs

use serde::Deserialize;
use validator::Validate;

use super::snapshot::{MAX_HORIZON_DAYS, MAX_LIMIT, OrganizationDto, Reference, StudentDto};

#[derive(Debug, Deserialize, Validate)]
pub struct RenewalRequest {
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default)]
    pub students: Vec<StudentDto>,
    #[serde(default)]
    pub organizations: Vec<OrganizationDto>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DashboardRequest {
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default)]
    pub students: Vec<StudentDto>,
    #[serde(default)]
    pub organizations: Vec<OrganizationDto>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub insurance_horizon_days: Option<i64>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub certification_horizon_days: Option<i64>,
    #[validate(range(min = 0, max = MAX_LIMIT))]
    pub urgent_limit: Option<i64>,
}
