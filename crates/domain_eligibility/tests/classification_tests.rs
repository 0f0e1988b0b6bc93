//! Tests for insurance and certification classification

use chrono::{TimeZone, Utc};
use core_kernel::{AsOf, Timezone};
use domain_eligibility::{
    classify_certification, classify_insurance, CertificationRecord, Horizon, InsuranceRecord,
    ValidityStatus,
};
use test_utils::{assert_classified, RosterFixtures, StringFixtures, TemporalFixtures};

fn insurance(expires: chrono::NaiveDate) -> InsuranceRecord {
    InsuranceRecord::new(StringFixtures::provider(), StringFixtures::policy_number(), expires)
}

mod insurance_scenarios {
    use super::*;

    #[test]
    fn test_expired_insurance_reports_days_since() {
        let as_of = TemporalFixtures::as_of_date(2024, 1, 15);
        let student = RosterFixtures::expired_student();

        let result = classify_insurance(&as_of, student.insurance.as_ref(), Horizon::default());

        assert_eq!(result.status, ValidityStatus::Expired);
        assert_eq!(result.days_since, Some(45));
        assert_eq!(result.days_until, None);
        assert_eq!(result.record, student.insurance);
    }

    #[test]
    fn test_expiring_soon_reports_days_until() {
        let as_of = TemporalFixtures::as_of_date(2024, 1, 10);
        let student = RosterFixtures::expiring_student();

        let result = classify_insurance(&as_of, student.insurance.as_ref(), Horizon::days(30).unwrap());

        assert_eq!(result.status, ValidityStatus::ExpiringSoon);
        assert_eq!(result.days_until, Some(10));
    }

    #[test]
    fn test_missing_insurance() {
        let student = RosterFixtures::uninsured_student();
        let result = classify_insurance(&TemporalFixtures::as_of(), student.insurance.as_ref(), Horizon::default());

        assert_classified(&result, ValidityStatus::Missing, None);
        assert!(result.record.is_none());
    }

    #[test]
    fn test_far_future_is_valid() {
        let result = classify_insurance(
            &TemporalFixtures::as_of(),
            Some(&insurance(TemporalFixtures::date(2025, 6, 1))),
            Horizon::default(),
        );
        assert_eq!(result.status, ValidityStatus::Valid);
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_expiring_on_reference_date_is_expired() {
        let as_of = TemporalFixtures::as_of();
        let result = classify_insurance(&as_of, Some(&insurance(TemporalFixtures::date(2024, 1, 1))), Horizon::default());

        assert_classified(&result, ValidityStatus::Expired, Some(0));
    }

    #[test]
    fn test_exactly_horizon_days_out_is_valid() {
        let as_of = TemporalFixtures::as_of();
        let result = classify_insurance(&as_of, Some(&insurance(TemporalFixtures::date(2024, 1, 31))), Horizon::default());

        assert_classified(&result, ValidityStatus::Valid, Some(30));
    }

    #[test]
    fn test_one_day_inside_horizon_is_expiring_soon() {
        let as_of = TemporalFixtures::as_of();
        let result = classify_insurance(&as_of, Some(&insurance(TemporalFixtures::date(2024, 1, 30))), Horizon::default());

        assert_classified(&result, ValidityStatus::ExpiringSoon, Some(29));
    }

    #[test]
    fn test_day_after_reference_is_expiring_soon() {
        let as_of = TemporalFixtures::as_of();
        let result = classify_insurance(&as_of, Some(&insurance(TemporalFixtures::date(2024, 1, 2))), Horizon::default());

        assert_classified(&result, ValidityStatus::ExpiringSoon, Some(1));
    }

    #[test]
    fn test_time_of_day_does_not_move_the_boundary() {
        let late = AsOf::utc(Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap());
        let result = classify_insurance(&late, Some(&insurance(TemporalFixtures::date(2024, 1, 31))), Horizon::default());

        assert_eq!(result.status, ValidityStatus::Valid);
    }

    #[test]
    fn test_timezone_decides_today() {
        // 2024-01-31T03:00Z is still Jan 30 in Los Angeles
        let instant = Utc.with_ymd_and_hms(2024, 1, 31, 3, 0, 0).unwrap();
        let record = insurance(TemporalFixtures::date(2024, 1, 31));

        let utc = classify_insurance(&AsOf::utc(instant), Some(&record), Horizon::default());
        let la = classify_insurance(
            &AsOf::new(instant, Timezone::parse("America/Los_Angeles").unwrap()),
            Some(&record),
            Horizon::default(),
        );

        assert_eq!(utc.status, ValidityStatus::Expired);
        assert_classified(&la, ValidityStatus::ExpiringSoon, Some(1));
    }

    #[test]
    fn test_custom_horizon() {
        let as_of = TemporalFixtures::as_of();
        let record = insurance(TemporalFixtures::date(2024, 3, 1));

        let wide = classify_insurance(&as_of, Some(&record), Horizon::days(90).unwrap());
        let narrow = classify_insurance(&as_of, Some(&record), Horizon::days(7).unwrap());

        assert_eq!(wide.status, ValidityStatus::ExpiringSoon);
        assert_eq!(narrow.status, ValidityStatus::Valid);
    }
}

mod certifications {
    use super::*;

    #[test]
    fn test_non_expiring_certification_is_always_valid() {
        let cert = CertificationRecord::permanent("Basic Pistol", TemporalFixtures::date(2010, 5, 5));
        let result = classify_certification(&TemporalFixtures::as_of_date(2090, 1, 1), &cert, Horizon::default()).unwrap();

        assert_classified(&result, ValidityStatus::Valid, None);
    }

    #[test]
    fn test_certification_follows_insurance_rules() {
        let cert = CertificationRecord::new(
            "Range Safety Officer",
            TemporalFixtures::date(2022, 1, 20),
            Some(TemporalFixtures::date(2024, 1, 20)),
        )
        .unwrap();

        let before = classify_certification(&TemporalFixtures::as_of_date(2024, 1, 10), &cert, Horizon::default()).unwrap();
        let on = classify_certification(&TemporalFixtures::as_of_date(2024, 1, 20), &cert, Horizon::default()).unwrap();

        assert_classified(&before, ValidityStatus::ExpiringSoon, Some(10));
        assert_classified(&on, ValidityStatus::Expired, Some(0));
    }

    #[test]
    fn test_inverted_dates_fail_with_field() {
        let mut cert = CertificationRecord::permanent("Rifle", TemporalFixtures::date(2024, 1, 10));
        cert.expiration_date = Some(TemporalFixtures::date(2024, 1, 9));

        let err = classify_certification(&TemporalFixtures::as_of(), &cert, Horizon::default()).unwrap_err();
        assert_eq!(err.field(), "certification.expiration_date");
    }
}

mod idempotence {
    use super::*;

    #[test]
    fn test_repeated_calls_agree() {
        let as_of = TemporalFixtures::as_of_date(2024, 1, 10);
        for student in RosterFixtures::insurance_roster() {
            let first = classify_insurance(&as_of, student.insurance.as_ref(), Horizon::default());
            let second = classify_insurance(&as_of, student.insurance.as_ref(), Horizon::default());
            assert_eq!(first, second);
        }
    }
}
