//! Eligibility & Renewal Domain
//!
//! This crate decides whether a student's insurance and certifications are
//! valid, expiring soon, expired or missing, and builds the renewal
//! worklists and reports that follow from it.
//!
//! # Architecture
//!
//! The domain is pure: every operation is a function of the snapshot it is
//! given and an explicit reference instant ([`core_kernel::AsOf`]). Nothing
//! reads the clock, nothing is persisted, and every call either returns a
//! complete result or fails with one [`EligibilityError`].
//!
//! - **Records**: `StudentRef`, `OrganizationRef`, `InsuranceRecord`, `CertificationRecord`
//! - **Classification**: `ValidityStatus` over a half-open horizon
//! - **Insurance**: summary counts, urgent-case ranking, status filter
//! - **Renewal**: per-student and per-organization certification worklists
//! - **Validity**: competency validity periods in calendar months
//! - **Dashboard / Reports**: aggregate views for the presentation layer
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::AsOf;
//! use domain_eligibility::{classify_insurance, Horizon, ValidityStatus};
//!
//! let as_of = AsOf::on(today);
//! let result = classify_insurance(&as_of, student.insurance.as_ref(), Horizon::default());
//! if result.status == ValidityStatus::Expired {
//!     notify(student);
//! }
//! ```

pub mod records;
pub mod classification;
pub mod insurance;
pub mod renewal;
pub mod validity;
pub mod dashboard;
pub mod reports;
pub mod error;

pub use records::{
    CertificationRecord, Expiring, InsuranceRecord, OrganizationRef, StudentRef,
    validate_organizations, validate_students,
};
pub use classification::{
    classify, classify_certification, classify_insurance, Classification, Horizon,
    ValidityStatus,
};
pub use insurance::{
    compute_insurance_summary, filter_by_insurance_status, rank_urgent_insurance_cases,
    InsuranceFilter, InsuranceSummary, UrgentInsuranceCase, DEFAULT_URGENT_LIMIT,
};
pub use renewal::{
    build_renewal_worklist, OrganizationRenewal, RenewalUrgency, RenewalWorklist,
    StudentRenewal,
};
pub use validity::ValidityPolicy;
pub use dashboard::{build_dashboard_overview, DashboardOverview, DashboardSettings};
pub use reports::{
    expiring_certifications_report, insurance_status_report, ExpiringCertificationRow,
    InsuranceStatusRow, REPORT_HORIZON_DAYS,
};
pub use error::{EligibilityError, EligibilityResult};
