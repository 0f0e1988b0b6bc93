//! Dashboard overview
//!
//! One call producing the numbers behind the dashboard stat cards, the
//! insurance status card and the renewal card.

use core_kernel::AsOf;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::classification::Horizon;
use crate::error::EligibilityResult;
use crate::insurance::{
    compute_insurance_summary, rank_urgent_insurance_cases, InsuranceSummary,
    UrgentInsuranceCase, DEFAULT_URGENT_LIMIT,
};
use crate::records::{OrganizationRef, StudentRef};
use crate::renewal::{build_renewal_worklist, RenewalUrgency, RenewalWorklist};

/// Caller-supplied parameters for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub insurance_horizon: Horizon,
    pub certification_horizon: Horizon,
    pub urgent_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            insurance_horizon: Horizon::default(),
            certification_horizon: Horizon::default(),
            urgent_limit: DEFAULT_URGENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub total_students: usize,
    pub insurance: InsuranceSummary,
    pub urgent_insurance: Vec<UrgentInsuranceCase>,
    pub students_needing_renewal: usize,
    pub organizations_needing_renewal: usize,
    pub critical_renewals: usize,
    pub renewals: RenewalWorklist,
}

#[instrument(skip_all, fields(students = students.len(), organizations = organizations.len()))]
pub fn build_dashboard_overview(
    as_of: &AsOf,
    students: &[StudentRef],
    organizations: &[OrganizationRef],
    settings: DashboardSettings,
) -> EligibilityResult<DashboardOverview> {
    let insurance = compute_insurance_summary(as_of, students, settings.insurance_horizon)?;
    let urgent_insurance = rank_urgent_insurance_cases(
        as_of,
        students,
        settings.insurance_horizon,
        settings.urgent_limit,
    )?;
    let renewals =
        build_renewal_worklist(as_of, students, organizations, settings.certification_horizon)?;

    let critical_renewals = renewals
        .student_renewals
        .iter()
        .filter(|r| r.urgency == RenewalUrgency::Critical)
        .count();

    Ok(DashboardOverview {
        total_students: students.len(),
        insurance,
        urgent_insurance,
        students_needing_renewal: renewals.student_renewals.len(),
        organizations_needing_renewal: renewals.organization_renewals.len(),
        critical_renewals,
        renewals,
    })
}
