//! Tests for report rows

use domain_eligibility::{
    expiring_certifications_report, insurance_status_report, Horizon, ValidityStatus,
    REPORT_HORIZON_DAYS,
};
use test_utils::{IdFixtures, OrganizationBuilder, RosterFixtures, StudentBuilder, TemporalFixtures};

fn report_horizon() -> Horizon {
    Horizon::from_days(REPORT_HORIZON_DAYS)
}

#[test]
fn test_expiring_report_uses_ninety_day_window() {
    let as_of = TemporalFixtures::as_of();
    let org = OrganizationBuilder::new().with_name("Front Sight").build();
    let roster = vec![
        StudentBuilder::new()
            .with_id(IdFixtures::student_id(1))
            .with_name("Dana")
            .in_organization(org.id)
            .certified_until("Handgun", TemporalFixtures::date(2024, 3, 15))
            .certified_until("Rifle", TemporalFixtures::date(2024, 4, 1))
            .build(),
        StudentBuilder::new()
            .with_id(IdFixtures::student_id(2))
            .with_name("Eli")
            .certified_until("Shotgun", TemporalFixtures::date(2023, 12, 1))
            .build(),
    ];

    let rows = expiring_certifications_report(&as_of, &roster, &[org], report_horizon(), None).unwrap();

    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.student_name.as_str(), r.organization.as_str(), r.certification.as_str(), r.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Eli", "Independent", "Shotgun", ValidityStatus::Expired),
            ("Dana", "Front Sight", "Handgun", ValidityStatus::ExpiringSoon),
        ]
    );
    assert_eq!(rows[0].days_until_expiration, -31);
    assert_eq!(rows[1].days_until_expiration, 74);
}

#[test]
fn test_insurance_report_keeps_input_order() {
    let as_of = TemporalFixtures::as_of_date(2024, 1, 10);
    let rows = insurance_status_report(&as_of, &RosterFixtures::insurance_roster(), &[], Horizon::default(), None).unwrap();

    let statuses: Vec<_> = rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![ValidityStatus::Expired, ValidityStatus::ExpiringSoon, ValidityStatus::Missing]
    );
    assert_eq!(rows[0].days_until_expiration, Some(-40));
    assert_eq!(rows[1].policy_number.as_deref(), Some("CCW-S2"));
    assert_eq!(rows[2].provider, None);
    assert_eq!(rows[2].organization, "Independent");
}

#[test]
fn test_report_rows_serialize_with_snake_case_status() {
    let as_of = TemporalFixtures::as_of_date(2024, 1, 10);
    let rows = insurance_status_report(&as_of, &[RosterFixtures::expiring_student()], &[], Horizon::default(), None).unwrap();

    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["status"], "expiring_soon");
    assert_eq!(json[0]["expiration_date"], "2024-01-20");
}

#[test]
fn test_reports_scoped_to_one_organization() {
    let (mut students, organizations) = RosterFixtures::two_organization_roster();
    students.extend(RosterFixtures::insurance_roster());
    let as_of = TemporalFixtures::as_of_date(2024, 1, 10);
    let org_a = IdFixtures::organization_id(1);
    let org_b = IdFixtures::organization_id(2);

    let certs = expiring_certifications_report(&as_of, &students, &organizations, report_horizon(), Some(org_a)).unwrap();
    let names: Vec<_> = certs.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(names, vec!["Alex A"]);
    assert_eq!(certs[0].organization, "Org A");

    let insurance = insurance_status_report(&as_of, &students, &organizations, Horizon::default(), Some(org_b)).unwrap();
    let names: Vec<_> = insurance.iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(names, vec!["Blair B"]);

    let everyone = insurance_status_report(&as_of, &students, &organizations, Horizon::default(), None).unwrap();
    assert_eq!(everyone.len(), 5);
}
