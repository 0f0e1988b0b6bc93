//! Dashboard handler

use axum::{extract::State, Json};
use domain_eligibility::{build_dashboard_overview, DashboardOverview, DashboardSettings};
use tracing::instrument;
use validator::Validate;

use crate::dto::renewals::DashboardRequest;
use crate::dto::snapshot::{horizon_or, into_organizations, into_students, limit_or};
use crate::{error::ApiError, AppState};

/// Insurance summary, urgent cases and renewal worklist in one call
#[instrument(skip_all, fields(students = request.students.len()))]
pub async fn overview(
    State(state): State<AppState>,
    Json(request): Json<DashboardRequest>,
) -> Result<Json<DashboardOverview>, ApiError> {
    request.validate()?;
    let config = &state.config;
    let as_of = request.reference.resolve(config)?;
    let settings = DashboardSettings {
        insurance_horizon: horizon_or(
            request.insurance_horizon_days,
            "insurance_horizon_days",
            config.insurance_horizon(),
        )?,
        certification_horizon: horizon_or(
            request.certification_horizon_days,
            "certification_horizon_days",
            config.certification_horizon(),
        )?,
        urgent_limit: limit_or(request.urgent_limit, "urgent_limit", config.urgent_limit)?,
    };
    let students = into_students(request.students)?;
    let organizations = into_organizations(request.organizations);

    Ok(Json(build_dashboard_overview(&as_of, &students, &organizations, settings)?))
}
