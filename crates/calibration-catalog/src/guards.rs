//! Pure guard predicates over calibration profiles
//!
//! Each guard is total: it returns a boolean for any profile and never
//! fails. A profile whose family code doesn't match what a guard expects
//! simply yields `false`.

use calibration_types::{
    BiosenseCalibrationProfile, BodyTrackingCalibrationProfile, CalibrationConstants,
    CalibrationLogisticsProfile,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::canonical::MOCAP_OPTICAL;
use crate::service::CalibrationDescriptorService;

/// Optical mocap profile whose RMS ceiling is within the registry drift ceiling.
pub fn optical_mocap_within_guard(p: &BodyTrackingCalibrationProfile) -> bool {
    p.family_code == MOCAP_OPTICAL
        && p.max_allowed_rms_error_mm <= CalibrationConstants::MAX_ALLOWED_CAL_DRIFT_MM
}

/// Biosense profile whose bias ceiling is within the registry drift ceiling.
pub fn biosense_bias_within_guard(p: &BiosenseCalibrationProfile) -> bool {
    p.max_allowed_bias_pct <= CalibrationConstants::MAX_ALLOWED_CAL_DRIFT_PCT
}

/// Logistics profile that requires both a traceable ID and an audit log.
pub fn logistics_traceability_guard(p: &CalibrationLogisticsProfile) -> bool {
    p.requires_traceable_id && p.requires_audit_log
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardKind {
    OpticalMocapWithin,
    BiosenseBiasWithin,
    LogisticsTraceability,
}

impl GuardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardKind::OpticalMocapWithin => "optical_mocap_within_guard",
            GuardKind::BiosenseBiasWithin => "biosense_bias_within_guard",
            GuardKind::LogisticsTraceability => "logistics_traceability_guard",
        }
    }
}

/// Result of applying one guard to one profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardOutcome {
    pub profile_id: Uuid,
    pub guard: GuardKind,
    pub passed: bool,
}

/// Guard outcomes across a whole catalog, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardReport {
    pub outcomes: Vec<GuardOutcome>,
}

impl GuardReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &GuardOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn outcome_for(&self, profile_id: Uuid) -> Option<&GuardOutcome> {
        self.outcomes.iter().find(|o| o.profile_id == profile_id)
    }
}

/// Apply each guard to the profiles it covers.
///
/// The optical guard is only applied to body-tracking profiles of the
/// optical family; other body-tracking families have no guard and are
/// left out of the report.
pub fn evaluate_guards<S>(service: &S) -> GuardReport
where
    S: CalibrationDescriptorService + ?Sized,
{
    let mut outcomes = Vec::new();

    for p in service
        .list_bodytrack_profiles()
        .iter()
        .filter(|p| p.family_code == MOCAP_OPTICAL)
    {
        outcomes.push(GuardOutcome {
            profile_id: p.id,
            guard: GuardKind::OpticalMocapWithin,
            passed: optical_mocap_within_guard(p),
        });
    }

    for p in service.list_biosense_profiles() {
        outcomes.push(GuardOutcome {
            profile_id: p.id,
            guard: GuardKind::BiosenseBiasWithin,
            passed: biosense_bias_within_guard(p),
        });
    }

    for p in service.list_logistics_profiles() {
        outcomes.push(GuardOutcome {
            profile_id: p.id,
            guard: GuardKind::LogisticsTraceability,
            passed: logistics_traceability_guard(p),
        });
    }

    debug!(
        evaluated = outcomes.len(),
        failed = outcomes.iter().filter(|o| !o.passed).count(),
        "Guards evaluated"
    );
    GuardReport { outcomes }
}
