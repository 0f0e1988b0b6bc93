//! Certification renewal worklists
//!
//! Groups expiring and expired certifications per student and rolls them up
//! per organization, most urgent first.

use std::collections::HashMap;

use chrono::NaiveDate;
use core_kernel::{AsOf, OrganizationId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::classification::{classify, Horizon};
use crate::error::EligibilityResult;
use crate::records::{
    validate_organizations, validate_students, CertificationRecord, OrganizationRef, StudentRef,
};

/// Badge tier for a renewal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalUrgency {
    Critical,
    Warning,
}

impl RenewalUrgency {
    /// Entries this many days out or fewer are critical
    pub const CRITICAL_WITHIN_DAYS: i64 = 15;

    pub fn for_days(days_until_expiration: i64) -> Self {
        if days_until_expiration <= Self::CRITICAL_WITHIN_DAYS {
            RenewalUrgency::Critical
        } else {
            RenewalUrgency::Warning
        }
    }
}

/// One student's certifications needing renewal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRenewal {
    pub student: StudentRef,
    /// Every expiring or expired certification, in the student's order
    pub certifications: Vec<CertificationRecord>,
    /// Minimum signed days until expiration across `certifications`
    pub days_until_expiration: i64,
    pub urgency: RenewalUrgency,
}

/// An organization with at least one member needing renewal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationRenewal {
    pub organization: OrganizationRef,
    pub student_count: u32,
    /// Soonest qualifying expiration among the organization's students
    pub next_renewal_date: NaiveDate,
    /// Members with at least one qualifying certification
    pub students_affected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenewalWorklist {
    pub student_renewals: Vec<StudentRenewal>,
    pub organization_renewals: Vec<OrganizationRenewal>,
}

impl RenewalWorklist {
    pub fn is_empty(&self) -> bool {
        self.student_renewals.is_empty() && self.organization_renewals.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct OrganizationRollup {
    next_renewal_date: NaiveDate,
    students_affected: usize,
}

/// Builds the student and organization renewal worklists
///
/// A certification qualifies when it classifies as expiring soon or expired
/// within `horizon`. Students referencing an organization that is not in
/// `organizations` still appear in the student list.
#[instrument(skip_all, fields(
    students = students.len(),
    organizations = organizations.len(),
    horizon = horizon.as_days(),
))]
pub fn build_renewal_worklist(
    as_of: &AsOf,
    students: &[StudentRef],
    organizations: &[OrganizationRef],
    horizon: Horizon,
) -> EligibilityResult<RenewalWorklist> {
    validate_students(students)?;
    validate_organizations(organizations)?;

    let mut student_renewals = Vec::new();
    let mut rollups: HashMap<OrganizationId, OrganizationRollup> = HashMap::new();

    for student in students {
        let qualifying: Vec<CertificationRecord> = student
            .certifications
            .iter()
            .filter(|cert| classify(as_of, Some(*cert), horizon).status.needs_attention())
            .cloned()
            .collect();

        // Qualifying certifications always carry an expiration date
        let Some(soonest) = qualifying.iter().filter_map(|c| c.expiration_date).min() else {
            continue;
        };
        let days_until_expiration = as_of.days_until(soonest);

        if let Some(org_id) = student.organization {
            rollups
                .entry(org_id)
                .and_modify(|r| {
                    r.next_renewal_date = r.next_renewal_date.min(soonest);
                    r.students_affected += 1;
                })
                .or_insert(OrganizationRollup {
                    next_renewal_date: soonest,
                    students_affected: 1,
                });
        }

        student_renewals.push(StudentRenewal {
            student: student.clone(),
            certifications: qualifying,
            days_until_expiration,
            urgency: RenewalUrgency::for_days(days_until_expiration),
        });
    }

    student_renewals.sort_by(|a, b| {
        a.days_until_expiration
            .cmp(&b.days_until_expiration)
            .then_with(|| a.student.id.cmp(&b.student.id))
    });

    let mut organization_renewals: Vec<OrganizationRenewal> = organizations
        .iter()
        .filter_map(|org| {
            let rollup = rollups.remove(&org.id)?;
            Some(OrganizationRenewal {
                organization: org.clone(),
                student_count: org.student_count,
                next_renewal_date: rollup.next_renewal_date,
                students_affected: rollup.students_affected,
            })
        })
        .collect();

    if !rollups.is_empty() {
        debug!(
            unknown_organizations = rollups.len(),
            "Students reference organizations missing from the snapshot"
        );
    }

    organization_renewals.sort_by(|a, b| {
        a.next_renewal_date
            .cmp(&b.next_renewal_date)
            .then_with(|| a.organization.id.cmp(&b.organization.id))
    });

    debug!(
        student_renewals = student_renewals.len(),
        organization_renewals = organization_renewals.len(),
        "Built renewal worklist"
    );

    Ok(RenewalWorklist {
        student_renewals,
        organization_renewals,
    })
}
