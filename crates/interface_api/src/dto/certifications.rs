//! Certification DTOs

use serde::Deserialize;
use validator::Validate;

use super::snapshot::{CertificationDto, MAX_HORIZON_DAYS, Reference};

#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyCertificationRequest {
    #[serde(flatten)]
    pub reference: Reference,
    pub certification: CertificationDto,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}
