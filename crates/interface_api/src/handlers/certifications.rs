//! Certification handlers

use axum::{extract::State, Json};
use domain_eligibility::{classify_certification, CertificationRecord, Classification};
use tracing::instrument;
use validator::Validate;

use crate::dto::certifications::ClassifyCertificationRequest;
use crate::dto::snapshot::horizon_or;
use crate::{error::ApiError, AppState};

/// Classifies a single certification record
#[instrument(skip_all)]
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyCertificationRequest>,
) -> Result<Json<Classification<CertificationRecord>>, ApiError> {
    request.validate()?;
    let as_of = request.reference.resolve(&state.config)?;
    let horizon = horizon_or(
        request.horizon_days,
        "horizon_days",
        state.config.certification_horizon(),
    )?;
    let record = request.certification.into_record("certification")?;

    Ok(Json(classify_certification(&as_of, &record, horizon)?))
}
