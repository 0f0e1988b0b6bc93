//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Tests specify only the dates and relationships they care about; names and
//! policy numbers are filled in.

use chrono::{Days, NaiveDate};
use core_kernel::{OrganizationId, StudentId};
use domain_eligibility::{CertificationRecord, InsuranceRecord, OrganizationRef, StudentRef};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for constructing test students
pub struct StudentBuilder {
    id: StudentId,
    display_name: String,
    organization: Option<OrganizationId>,
    insurance: Option<InsuranceRecord>,
    certifications: Vec<CertificationRecord>,
}

impl Default for StudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentBuilder {
    /// Creates a new builder with a random id and name and no records
    pub fn new() -> Self {
        Self {
            id: StudentId::new(),
            display_name: Name().fake(),
            organization: None,
            insurance: None,
            certifications: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn in_organization(mut self, organization: OrganizationId) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Adds insurance expiring on the given date
    pub fn insured_until(mut self, expiration_date: NaiveDate) -> Self {
        self.insurance = Some(InsuranceRecord::new(
            StringFixtures::provider(),
            StringFixtures::policy_number(),
            expiration_date,
        ));
        self
    }

    pub fn with_insurance(mut self, insurance: InsuranceRecord) -> Self {
        self.insurance = Some(insurance);
        self
    }

    /// Adds a certification issued two years before it expires
    pub fn certified_until(mut self, name: impl Into<String>, expiration_date: NaiveDate) -> Self {
        let issued = expiration_date
            .checked_sub_days(Days::new(730))
            .unwrap_or(expiration_date);
        self.certifications.push(
            CertificationRecord::new(name, issued, Some(expiration_date))
                .expect("issue date precedes expiration"),
        );
        self
    }

    /// Adds a certification that never expires
    pub fn permanently_certified(mut self, name: impl Into<String>) -> Self {
        self.certifications.push(CertificationRecord::permanent(
            name,
            TemporalFixtures::date(2020, 1, 1),
        ));
        self
    }

    pub fn with_certification(mut self, certification: CertificationRecord) -> Self {
        self.certifications.push(certification);
        self
    }

    pub fn build(self) -> StudentRef {
        StudentRef {
            id: self.id,
            display_name: self.display_name,
            organization: self.organization,
            insurance: self.insurance,
            certifications: self.certifications,
        }
    }
}

/// Builder for constructing test organizations
pub struct OrganizationBuilder {
    id: OrganizationId,
    display_name: String,
    student_count: u32,
}

impl Default for OrganizationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizationBuilder {
    pub fn new() -> Self {
        Self {
            id: OrganizationId::new(),
            display_name: CompanyName().fake(),
            student_count: 0,
        }
    }

    pub fn with_id(mut self, id: OrganizationId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_student_count(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    pub fn build(self) -> OrganizationRef {
        OrganizationRef::new(self.id, self.display_name, self.student_count)
    }
}
