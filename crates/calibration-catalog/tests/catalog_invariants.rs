//! Invariants of the reference catalog, checked through the public API.

use std::collections::HashSet;

use calibration_catalog::{
    biosense_bias_within_guard, check_referential_integrity, logistics_traceability_guard,
    optical_mocap_within_guard, CalibrationConstants, CalibrationDescriptorService,
    CalibrationRecord, FacilityType, InMemoryCalibrationDescriptorService, IMU_BODY,
    MOCAP_OPTICAL, MULTIPLEX_BIOSENSE,
};
use chrono::NaiveDate;
use uuid::Uuid;

fn service() -> InMemoryCalibrationDescriptorService {
    InMemoryCalibrationDescriptorService::new()
}

#[test]
fn bodytrack_ranges_are_ordered() {
    for p in service().list_bodytrack_profiles() {
        assert!(p.min_markers_or_sensors <= p.max_markers_or_sensors, "{}", p.family_code);
        assert!(p.target_rms_error_mm <= p.max_allowed_rms_error_mm, "{}", p.family_code);
        assert!(
            p.min_calibration_duration_sec <= p.max_calibration_duration_sec,
            "{}",
            p.family_code
        );
    }
}

#[test]
fn biosense_ranges_are_ordered_and_interval_bounded() {
    for p in service().list_biosense_profiles() {
        assert!(p.min_analytes <= p.max_analytes);
        assert!(p.target_bias_pct <= p.max_allowed_bias_pct);
        assert!(p.target_cv_pct <= p.max_allowed_cv_pct);
        assert!(p.max_interval_days <= CalibrationConstants::MAX_CAL_INTERVAL_DAYS);
    }
}

#[test]
fn successive_listings_are_equal_and_ordered() {
    let a = service();
    let b = service();
    assert_eq!(a.list_device_families(), b.list_device_families());
    assert_eq!(a.list_bodytrack_profiles(), b.list_bodytrack_profiles());
    assert_eq!(a.list_biosense_profiles(), b.list_biosense_profiles());
    assert_eq!(a.list_logistics_profiles(), b.list_logistics_profiles());
    assert!(!a.list_device_families().is_empty());
}

#[test]
fn every_profile_family_code_resolves() {
    let svc = service();
    let codes: HashSet<&str> = svc
        .list_device_families()
        .iter()
        .map(|f| f.family_code.as_str())
        .collect();

    for p in svc.list_bodytrack_profiles() {
        assert!(codes.contains(p.family_code.as_str()), "{}", p.family_code);
    }
    for p in svc.list_biosense_profiles() {
        assert!(codes.contains(p.family_code.as_str()), "{}", p.family_code);
    }
    assert!(check_referential_integrity(&svc).is_clean());
}

#[test]
fn guard_outcomes_on_reference_profiles() {
    let svc = service();

    let optical = svc.bodytrack_profiles_for(MOCAP_OPTICAL)[0];
    assert_eq!(optical.max_allowed_rms_error_mm, 2.0);
    assert!(optical_mocap_within_guard(optical));

    let imu = svc.bodytrack_profiles_for(IMU_BODY)[0];
    assert!(!optical_mocap_within_guard(imu));

    let biosense = svc.biosense_profiles_for(MULTIPLEX_BIOSENSE)[0];
    assert!(biosense_bias_within_guard(biosense));

    let hospital = svc.logistics_profile_for(FacilityType::Hospital).unwrap();
    assert!(logistics_traceability_guard(hospital));

    let mut without_audit = hospital.clone();
    without_audit.requires_audit_log = false;
    assert!(!logistics_traceability_guard(&without_audit));
}

#[test]
fn records_reference_catalog_families() {
    let svc = service();
    let record = CalibrationRecord::builder()
        .record_id(Uuid::new_v4())
        .equipment_id(Uuid::new_v4())
        .performed_on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
        .performed_by_role("clinical_engineer")
        .profile_family_code(MULTIPLEX_BIOSENSE)
        .passed(true)
        .notes("controls within range")
        .build()
        .unwrap();

    let family = svc.find_device_family(&record.profile_family_code).unwrap();
    let interval = svc.biosense_profiles_for(&family.family_code)[0].max_interval_days;
    assert_eq!(
        record.next_due(interval),
        NaiveDate::from_ymd_opt(2027, 6, 1)
    );
    assert!(!record.is_overdue(NaiveDate::from_ymd_opt(2027, 6, 1).unwrap(), interval));
}

#[test]
fn listings_are_shareable_across_threads() {
    let svc = service();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let svc = svc.clone();
            std::thread::spawn(move || svc.list_device_families().len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}
