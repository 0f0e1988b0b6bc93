//! Report rows
//!
//! Flat, presentation-ready rows for the expiring certifications report and
//! the insurance status report. Rendering to files happens elsewhere.

use std::collections::HashMap;

use chrono::NaiveDate;
use core_kernel::{AsOf, OrganizationId, StudentId};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::classification::{classify, classify_insurance, Horizon, ValidityStatus};
use crate::error::EligibilityResult;
use crate::records::{validate_organizations, validate_students, OrganizationRef, StudentRef};

/// Default look-ahead for the expiring certifications report
pub const REPORT_HORIZON_DAYS: u32 = 90;

/// Label used for students without an organization
pub const INDEPENDENT: &str = "Independent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringCertificationRow {
    pub student_id: StudentId,
    pub student_name: String,
    pub organization: String,
    pub certification: String,
    pub issued_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub days_until_expiration: i64,
    pub status: ValidityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsuranceStatusRow {
    pub student_id: StudentId,
    pub student_name: String,
    pub organization: String,
    pub provider: Option<String>,
    pub policy_number: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub days_until_expiration: Option<i64>,
    pub status: ValidityStatus,
}

fn organization_names(organizations: &[OrganizationRef]) -> HashMap<OrganizationId, &str> {
    organizations
        .iter()
        .map(|o| (o.id, o.display_name.as_str()))
        .collect()
}

/// `None` keeps every student; `Some(id)` keeps only that organization's members
fn in_scope(student: &StudentRef, organization: Option<OrganizationId>) -> bool {
    organization.map_or(true, |id| student.organization == Some(id))
}

fn organization_label(names: &HashMap<OrganizationId, &str>, student: &StudentRef) -> String {
    student
        .organization
        .and_then(|id| names.get(&id).copied())
        .unwrap_or(INDEPENDENT)
        .to_string()
}

/// One row per certification expiring within `horizon` or already expired
///
/// Rows are ordered by expiration date, then student id, then certification
/// name. When `organization` is set only its members are reported.
#[instrument(skip_all, fields(
    students = students.len(),
    horizon = horizon.as_days(),
    organization = ?organization,
))]
pub fn expiring_certifications_report(
    as_of: &AsOf,
    students: &[StudentRef],
    organizations: &[OrganizationRef],
    horizon: Horizon,
    organization: Option<OrganizationId>,
) -> EligibilityResult<Vec<ExpiringCertificationRow>> {
    validate_students(students)?;
    validate_organizations(organizations)?;
    let names = organization_names(organizations);

    let mut rows = Vec::new();
    for student in students.iter().filter(|s| in_scope(s, organization)) {
        for cert in &student.certifications {
            let classification = classify(as_of, Some(cert), horizon);
            let Some(expiration_date) = cert.expiration_date else {
                continue;
            };
            if !classification.status.needs_attention() {
                continue;
            }
            rows.push(ExpiringCertificationRow {
                student_id: student.id,
                student_name: student.display_name.clone(),
                organization: organization_label(&names, student),
                certification: cert.name.clone(),
                issued_date: cert.issued_date,
                expiration_date,
                days_until_expiration: as_of.days_until(expiration_date),
                status: classification.status,
            });
        }
    }

    rows.sort_by(|a, b| {
        a.expiration_date
            .cmp(&b.expiration_date)
            .then_with(|| a.student_id.cmp(&b.student_id))
            .then_with(|| a.certification.cmp(&b.certification))
    });

    debug!(rows = rows.len(), "Built expiring certifications report");
    Ok(rows)
}

/// One row per student describing their insurance, in input order
///
/// When `organization` is set only its members are reported.
#[instrument(skip_all, fields(students = students.len(), organization = ?organization))]
pub fn insurance_status_report(
    as_of: &AsOf,
    students: &[StudentRef],
    organizations: &[OrganizationRef],
    horizon: Horizon,
    organization: Option<OrganizationId>,
) -> EligibilityResult<Vec<InsuranceStatusRow>> {
    validate_students(students)?;
    validate_organizations(organizations)?;
    let names = organization_names(organizations);

    Ok(students
        .iter()
        .filter(|s| in_scope(s, organization))
        .map(|student| {
            let insurance = student.insurance.as_ref();
            let classification = classify_insurance(as_of, insurance, horizon);
            InsuranceStatusRow {
                student_id: student.id,
                student_name: student.display_name.clone(),
                organization: organization_label(&names, student),
                provider: insurance.map(|i| i.provider.clone()),
                policy_number: insurance.map(|i| i.policy_number.clone()),
                expiration_date: insurance.map(|i| i.expiration_date),
                days_until_expiration: classification.signed_days(),
                status: classification.status,
            }
        })
        .collect())
}
