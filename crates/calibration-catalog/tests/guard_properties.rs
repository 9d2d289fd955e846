//! Property tests: guards agree with their closed-form definitions for
//! arbitrary profiles, including ones the reference catalog never defines.

use calibration_catalog::{
    biosense_bias_within_guard, logistics_traceability_guard, optical_mocap_within_guard,
    BiosenseCalibrationProfile, BodyTrackingCalibrationProfile, CalibrationConstants,
    CalibrationLogisticsProfile, FacilityType, MOCAP_OPTICAL,
};
use proptest::prelude::*;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_family_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(MOCAP_OPTICAL.to_string()),
        Just("IMU_BODY".to_string()),
        Just("MULTIPLEX_BIOSENSE".to_string()),
        "[A-Z_]{3,20}",
    ]
}

fn arb_bodytrack() -> impl Strategy<Value = BodyTrackingCalibrationProfile> {
    (
        arb_family_code(),
        (0u32..32, 0u32..64),
        (0.0f64..10.0, 0.0f64..10.0),
        any::<(bool, bool)>(),
    )
        .prop_map(|(code, (min_m, extra_m), (target, headroom), (sweep, stance))| {
            BodyTrackingCalibrationProfile::builder()
                .id(Uuid::new_v4())
                .family_code(code)
                .description("generated")
                .markers_or_sensors(min_m, min_m + extra_m)
                .rms_error_mm(target, target + headroom)
                .calibration_duration_sec(30.0, 600.0)
                .requires_full_body_sweep(sweep)
                .requires_quiet_stance(stance)
                .build()
                .unwrap()
        })
}

fn arb_biosense() -> impl Strategy<Value = BiosenseCalibrationProfile> {
    (0.0f64..8.0, 0.0f64..8.0, 1u32..=365).prop_map(|(target, headroom, interval)| {
        BiosenseCalibrationProfile::builder()
            .id(Uuid::new_v4())
            .family_code("MULTIPLEX_BIOSENSE")
            .description("generated")
            .analytes(1, 8)
            .bias_pct(target, target + headroom)
            .cv_pct(2.0, 10.0)
            .max_interval_days(interval)
            .build()
            .unwrap()
    })
}

fn arb_logistics() -> impl Strategy<Value = CalibrationLogisticsProfile> {
    (
        prop_oneof![
            Just(FacilityType::Hospital),
            Just(FacilityType::Lab),
            Just(FacilityType::Rehab),
        ],
        0u32..10,
        any::<(bool, bool, bool, bool)>(),
    )
        .prop_map(|(facility, staff, (room, plate, traceable, audit))| {
            CalibrationLogisticsProfile::builder()
                .id(Uuid::new_v4())
                .facility_type(facility)
                .description("generated")
                .min_staff_trained(staff)
                .requires_dedicated_room(room)
                .requires_force_plate_or_phantom(plate)
                .requires_traceable_id(traceable)
                .requires_audit_log(audit)
                .build()
                .unwrap()
        })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn optical_guard_matches_definition(p in arb_bodytrack()) {
        let expected = p.family_code == MOCAP_OPTICAL
            && p.max_allowed_rms_error_mm <= CalibrationConstants::MAX_ALLOWED_CAL_DRIFT_MM;
        prop_assert_eq!(optical_mocap_within_guard(&p), expected);
    }

    /// Any non-optical family fails regardless of its ceiling.
    #[test]
    fn optical_guard_rejects_other_families(p in arb_bodytrack()) {
        prop_assume!(p.family_code != MOCAP_OPTICAL);
        prop_assert!(!optical_mocap_within_guard(&p));
    }

    #[test]
    fn bias_guard_matches_definition(p in arb_biosense()) {
        let expected = p.max_allowed_bias_pct <= CalibrationConstants::MAX_ALLOWED_CAL_DRIFT_PCT;
        prop_assert_eq!(biosense_bias_within_guard(&p), expected);
    }

    #[test]
    fn traceability_guard_matches_definition(p in arb_logistics()) {
        let expected = p.requires_traceable_id && p.requires_audit_log;
        prop_assert_eq!(logistics_traceability_guard(&p), expected);
    }

    /// Room and force-plate flags never affect traceability.
    #[test]
    fn traceability_ignores_facility_equipment(p in arb_logistics()) {
        let mut flipped = p.clone();
        flipped.requires_dedicated_room = !p.requires_dedicated_room;
        flipped.requires_force_plate_or_phantom = !p.requires_force_plate_or_phantom;
        prop_assert_eq!(
            logistics_traceability_guard(&p),
            logistics_traceability_guard(&flipped)
        );
    }

    /// Builders never admit inverted marker ranges.
    #[test]
    fn builder_rejects_inverted_markers(min in 1u32..100, gap in 1u32..100) {
        let result = BodyTrackingCalibrationProfile::builder()
            .id(Uuid::new_v4())
            .family_code(MOCAP_OPTICAL)
            .description("inverted")
            .markers_or_sensors(min + gap, min)
            .rms_error_mm(0.5, 2.0)
            .calibration_duration_sec(30.0, 600.0)
            .build();
        prop_assert!(result.is_err());
    }
}
