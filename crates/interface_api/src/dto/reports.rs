//! Report DTOs

use chrono::NaiveDate;
use core_kernel::{DateWindow, OrganizationId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::snapshot::{MAX_HORIZON_DAYS, OrganizationDto, Reference, StudentDto};

#[derive(Debug, Deserialize, Validate)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub reference: Reference,
    #[serde(default)]
    pub students: Vec<StudentDto>,
    #[serde(default)]
    pub organizations: Vec<OrganizationDto>,
    /// Limits the report to one organization's members
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
    #[validate(range(min = 0, max = MAX_HORIZON_DAYS))]
    pub horizon_days: Option<i64>,
}

/// Report rows plus the parameters they were produced with
#[derive(Debug, Serialize)]
pub struct ReportResponse<T> {
    pub report_date: NaiveDate,
    pub timezone: String,
    pub horizon_days: u32,
    /// Dates covered by the look-ahead, `[report_date, report_date + horizon_days)`
    pub window: DateWindow,
    pub row_count: usize,
    pub rows: Vec<T>,
}

impl<T> ReportResponse<T> {
    pub fn new(timezone: String, horizon_days: u32, window: DateWindow, rows: Vec<T>) -> Self {
        Self {
            report_date: window.start,
            timezone,
            horizon_days,
            window,
            row_count: rows.len(),
            rows,
        }
    }
}
