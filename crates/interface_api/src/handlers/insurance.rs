//! Insurance handlers

use axum::{extract::State, Json};
use domain_eligibility::{
    classify_insurance, compute_insurance_summary, filter_by_insurance_status,
    rank_urgent_insurance_cases, Classification, InsuranceRecord, InsuranceSummary,
    UrgentInsuranceCase,
};
use tracing::instrument;
use validator::Validate;

use crate::dto::insurance::*;
use crate::dto::snapshot::{horizon_or, into_students, limit_or};
use crate::{error::ApiError, AppState};

/// Classifies a single insurance record
#[instrument(skip_all)]
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyInsuranceRequest>,
) -> Result<Json<Classification<InsuranceRecord>>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(request.horizon_days, "horizon_days", state.config.insurance_horizon())?;
    let record = request
        .insurance
        .map(|insurance| insurance.into_record("insurance"))
        .transpose()?;

    Ok(Json(classify_insurance(&as_of, record.as_ref(), horizon)))
}

/// Counts students per insurance status
#[instrument(skip_all, fields(students = request.students.len()))]
pub async fn summary(
    State(state): State<AppState>,
    Json(request): Json<InsuranceRosterRequest>,
) -> Result<Json<InsuranceSummary>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(request.horizon_days, "horizon_days", state.config.insurance_horizon())?;
    let students = into_students(request.students)?;

    Ok(Json(compute_insurance_summary(&as_of, &students, horizon)?))
}

/// Lists the most urgent expired or expiring policies
#[instrument(skip_all, fields(students = request.students.len()))]
pub async fn urgent(
    State(state): State<AppState>,
    Json(request): Json<UrgentInsuranceRequest>,
) -> Result<Json<Vec<UrgentInsuranceCase>>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(request.horizon_days, "horizon_days", state.config.insurance_horizon())?;
    let limit = limit_or(request.limit, "limit", state.config.urgent_limit)?;
    let students = into_students(request.students)?;

    Ok(Json(rank_urgent_insurance_cases(&as_of, &students, horizon, limit)?))
}

/// Filters the roster by insurance status
#[instrument(skip_all, fields(students = request.students.len(), filter = ?request.filter))]
pub async fn filter(
    State(state): State<AppState>,
    Json(request): Json<FilterInsuranceRequest>,
) -> Result<Json<FilterInsuranceResponse>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(request.horizon_days, "horizon_days", state.config.insurance_horizon())?;
    let students = into_students(request.students)?;

    let matching: Vec<_> = filter_by_insurance_status(&as_of, &students, request.filter, horizon)?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(FilterInsuranceResponse {
        filter: request.filter,
        count: matching.len(),
        students: matching,
    }))
}
