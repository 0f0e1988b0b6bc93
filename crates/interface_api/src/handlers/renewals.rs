//! Renewal worklist handlers

use axum::{extract::State, Json};
use domain_eligibility::{build_renewal_worklist, RenewalWorklist};
use tracing::instrument;
use validator::Validate;

use crate::dto::renewals::RenewalRequest;
use crate::dto::snapshot::{horizon_or, into_organizations, into_students};
use crate::{error::ApiError, AppState};

/// Builds the per-student and per-organization certification worklist
#[instrument(skip_all, fields(students = request.students.len(), organizations = request.organizations.len()))]
pub async fn worklist(
    State(state): State<AppState>,
    Json(request): Json<RenewalRequest>,
) -> Result<Json<RenewalWorklist>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(
        request.horizon_days,
        "horizon_days",
        state.config.certification_horizon(),
    )?;
    let students = into_students(request.students)?;
    let organizations = into_organizations(request.organizations);

    Ok(Json(build_renewal_worklist(&as_of, &students, &organizations, horizon)?))
}
