use std::sync::{Arc, OnceLock};

use calibration_types::{
    BiosenseCalibrationProfile, BodyTrackingCalibrationProfile, CalibrationConstants,
    CalibrationLogisticsProfile, DeviceClass, DeviceFamilyProfile, FacilityType,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub const MOCAP_OPTICAL: &str = "MOCAP_OPTICAL";
pub const IMU_BODY: &str = "IMU_BODY";
pub const MULTIPLEX_BIOSENSE: &str = "MULTIPLEX_BIOSENSE";

/// The four ordered tables that make up a calibration catalog.
///
/// Once built, a catalog is never mutated; the service hands out shared
/// slices into it. Decoding a catalog runs every profile through its
/// builder, so inverted or NaN ranges are rejected on the way in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    device_families: Vec<DeviceFamilyProfile>,
    bodytrack_profiles: Vec<BodyTrackingCalibrationProfile>,
    biosense_profiles: Vec<BiosenseCalibrationProfile>,
    logistics_profiles: Vec<CalibrationLogisticsProfile>,
}

impl ReferenceCatalog {
    pub fn new(
        device_families: Vec<DeviceFamilyProfile>,
        bodytrack_profiles: Vec<BodyTrackingCalibrationProfile>,
        biosense_profiles: Vec<BiosenseCalibrationProfile>,
        logistics_profiles: Vec<CalibrationLogisticsProfile>,
    ) -> Self {
        Self {
            device_families,
            bodytrack_profiles,
            biosense_profiles,
            logistics_profiles,
        }
    }

    pub fn device_families(&self) -> &[DeviceFamilyProfile] {
        &self.device_families
    }

    pub fn bodytrack_profiles(&self) -> &[BodyTrackingCalibrationProfile] {
        &self.bodytrack_profiles
    }

    pub fn biosense_profiles(&self) -> &[BiosenseCalibrationProfile] {
        &self.biosense_profiles
    }

    pub fn logistics_profiles(&self) -> &[CalibrationLogisticsProfile] {
        &self.logistics_profiles
    }
}

static REFERENCE: OnceLock<Arc<ReferenceCatalog>> = OnceLock::new();

/// The process-wide reference catalog, built on first access.
pub fn reference_catalog() -> Arc<ReferenceCatalog> {
    REFERENCE
        .get_or_init(|| {
            let catalog = ReferenceCatalog::new(
                device_families(),
                bodytrack_profiles(),
                biosense_profiles(),
                logistics_profiles(),
            );
            debug!(
                families = catalog.device_families.len(),
                bodytrack = catalog.bodytrack_profiles.len(),
                biosense = catalog.biosense_profiles.len(),
                logistics = catalog.logistics_profiles.len(),
                "Reference calibration catalog initialised"
            );
            Arc::new(catalog)
        })
        .clone()
}

/// Device families: optical mocap, body-worn IMUs, multiplexed biosensing.
pub fn device_families() -> Vec<DeviceFamilyProfile> {
    vec![
        DeviceFamilyProfile {
            id: Uuid::from_u128(0x11111111_1111_4111_8111_111111111111),
            family_code: MOCAP_OPTICAL.into(),
            device_class: DeviceClass::BodyTracking,
            modality_tags: vec!["optical".into(), "marker_based".into()],
            description: "Optical motion capture camera arrays for gait, AR/VR movement \
                          science, and neuromorphic exoskeleton labs."
                .into(),
            requires_3d_reference: true,
            requires_physical_phantom: true,
            iso13485_relevant: true,
        },
        DeviceFamilyProfile {
            id: Uuid::from_u128(0x22222222_2222_4222_8222_222222222222),
            family_code: IMU_BODY.into(),
            device_class: DeviceClass::BodyTracking,
            modality_tags: vec!["imu".into(), "wearable".into()],
            description: "Body-worn IMUs for sensor-to-segment tracking, anatomical \
                          calibration, and immersive AR rehabilitation."
                .into(),
            requires_3d_reference: false,
            requires_physical_phantom: false,
            iso13485_relevant: true,
        },
        DeviceFamilyProfile {
            id: Uuid::from_u128(0x33333333_3333_4333_8333_333333333333),
            family_code: MULTIPLEX_BIOSENSE.into(),
            device_class: DeviceClass::Biosensing,
            modality_tags: vec![
                "electrochemical".into(),
                "optical".into(),
                "multi_analyte".into(),
            ],
            description: "Multiplexed biosensing platforms for multi-analyte \
                          point-of-care testing and neuromorphic closed-loop feedback."
                .into(),
            requires_3d_reference: false,
            requires_physical_phantom: false,
            iso13485_relevant: true,
        },
    ]
}

/// Body-tracking calibration requirements.
///
/// The optical profile's RMS ceiling is pinned to the registry drift ceiling.
pub fn bodytrack_profiles() -> Vec<BodyTrackingCalibrationProfile> {
    vec![
        BodyTrackingCalibrationProfile {
            id: Uuid::from_u128(0x44444444_4444_4444_8444_444444444444),
            family_code: MOCAP_OPTICAL.into(),
            description: "Optical motion-capture volume calibration with wand grid, \
                          static reference, and AR alignment anchors."
                .into(),
            min_markers_or_sensors: 8,
            max_markers_or_sensors: 64,
            requires_full_body_sweep: true,
            requires_quiet_stance: true,
            target_rms_error_mm: 0.5,
            max_allowed_rms_error_mm: CalibrationConstants::MAX_ALLOWED_CAL_DRIFT_MM,
            min_calibration_duration_sec: 30.0,
            max_calibration_duration_sec: 600.0,
        },
        BodyTrackingCalibrationProfile {
            id: Uuid::from_u128(0x55555555_5555_4555_8555_555555555555),
            family_code: IMU_BODY.into(),
            description: "Anatomical calibration using quiet stance and standard \
                          movement tests, suitable for mixed AR/VR + IMU tracking."
                .into(),
            min_markers_or_sensors: 4,
            max_markers_or_sensors: 32,
            requires_full_body_sweep: false,
            requires_quiet_stance: true,
            target_rms_error_mm: 5.0,
            max_allowed_rms_error_mm: 10.0,
            min_calibration_duration_sec: 60.0,
            max_calibration_duration_sec: 900.0,
        },
    ]
}

/// Multi-analyte biosensing calibration requirements.
pub fn biosense_profiles() -> Vec<BiosenseCalibrationProfile> {
    vec![BiosenseCalibrationProfile {
        id: Uuid::from_u128(0x66666666_6666_4666_8666_666666666666),
        family_code: MULTIPLEX_BIOSENSE.into(),
        description: "Multi-analyte biosensing calibration using traceable controls \
                      and temperature-compensated curves for neuromorphic \
                      closed-loop AR/VR feedback."
            .into(),
        min_analytes: 2,
        max_analytes: 16,
        requires_reference_controls: true,
        requires_temp_compensation: true,
        target_bias_pct: 3.0,
        max_allowed_bias_pct: CalibrationConstants::MAX_ALLOWED_CAL_DRIFT_PCT,
        target_cv_pct: 5.0,
        max_allowed_cv_pct: 10.0,
        max_interval_days: CalibrationConstants::MAX_CAL_INTERVAL_DAYS,
    }]
}

/// Hospital and research-lab calibration logistics.
pub fn logistics_profiles() -> Vec<CalibrationLogisticsProfile> {
    vec![
        CalibrationLogisticsProfile {
            id: Uuid::from_u128(0x77777777_7777_4777_8777_777777777777),
            facility_type: FacilityType::Hospital,
            description: "Hospital gait lab and scanner calibration logistics, including \
                          AR/VR neuromorphic movement therapy suites."
                .into(),
            min_staff_trained: 2,
            requires_dedicated_room: true,
            requires_force_plate_or_phantom: true,
            requires_traceable_id: true,
            requires_audit_log: true,
        },
        CalibrationLogisticsProfile {
            id: Uuid::from_u128(0x88888888_8888_4888_8888_888888888888),
            facility_type: FacilityType::Lab,
            description: "Research lab body-tracking and biosensor calibration logistics \
                          for experimental AR/VR and REM-sleep environments."
                .into(),
            min_staff_trained: 1,
            requires_dedicated_room: false,
            requires_force_plate_or_phantom: false,
            requires_traceable_id: true,
            requires_audit_log: true,
        },
    ]
}
