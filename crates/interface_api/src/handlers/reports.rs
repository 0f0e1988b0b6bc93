//! Report handlers

use axum::{extract::State, Json};
use domain_eligibility::{
    expiring_certifications_report, insurance_status_report, ExpiringCertificationRow,
    InsuranceStatusRow,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::reports::{ReportRequest, ReportResponse};
use crate::dto::snapshot::{horizon_or, into_organizations, into_students};
use crate::{error::ApiError, AppState};

/// Certifications expiring within the report window, soonest first
#[instrument(skip_all, fields(students = request.students.len(), organization = ?request.organization_id))]
pub async fn expiring_certifications(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse<ExpiringCertificationRow>>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(request.horizon_days, "horizon_days", state.config.report_horizon())?;
    let students = into_students(request.students)?;
    let organizations = into_organizations(request.organizations);

    let rows = expiring_certifications_report(
        &as_of,
        &students,
        &organizations,
        horizon,
        request.organization_id,
    )?;
    info!(rows = rows.len(), "Expiring certifications report generated");

    Ok(Json(ReportResponse::new(
        as_of.timezone().name().to_string(),
        horizon.as_days(),
        as_of.window(horizon.as_days())?,
        rows,
    )))
}

/// One insurance row per student
#[instrument(skip_all, fields(students = request.students.len(), organization = ?request.organization_id))]
pub async fn insurance_status(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse<InsuranceStatusRow>>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(request.horizon_days, "horizon_days", state.config.insurance_horizon())?;
    let students = into_students(request.students)?;
    let organizations = into_organizations(request.organizations);

    let rows = insurance_status_report(
        &as_of,
        &students,
        &organizations,
        horizon,
        request.organization_id,
    )?;
    info!(rows = rows.len(), "Insurance status report generated");

    Ok(Json(ReportResponse::new(
        as_of.timezone().name().to_string(),
        horizon.as_days(),
        as_of.window(horizon.as_days())?,
        rows,
    )))
}
