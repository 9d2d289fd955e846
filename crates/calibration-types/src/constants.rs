use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalibrationError, Result};

/// Process-wide calibration and traceability constants.
///
/// Profile definitions reference these ceilings directly, and the guard
/// predicates compare against them.
pub struct CalibrationConstants;

impl CalibrationConstants {
    pub const REGISTRY_ID: Uuid = Uuid::from_u128(0xffffffff_ffff_4fff_8fff_ffffffffbb01);
    pub const REGISTRY_LABEL: &'static str = "Minimal-BodyTrack-Biosense-Calibration-Grid";
    pub const REGISTRY_VERSION: &'static str = "1.0.0";
    pub const REGISTRY_COMPLIANCE_TAG: &'static str = "ISO13485-CAL-READY";

    /// Ceiling on positional drift for motion systems, in millimeters.
    pub const MAX_ALLOWED_CAL_DRIFT_MM: f64 = 2.0;

    /// Ceiling on biosensor gain/offset drift per calibration interval, in percent.
    pub const MAX_ALLOWED_CAL_DRIFT_PCT: f64 = 5.0;

    /// Upper bound on the re-calibration interval for non-critical devices.
    pub const MAX_CAL_INTERVAL_DAYS: u32 = 365;

    pub fn registry_version() -> Result<semver::Version> {
        semver::Version::parse(Self::REGISTRY_VERSION)
            .map_err(|e| CalibrationError::InvalidVersion(e.to_string()))
    }

    /// Describe the registry these constants belong to.
    pub fn registry_info() -> Result<RegistryInfo> {
        Ok(RegistryInfo {
            id: Self::REGISTRY_ID,
            label: Self::REGISTRY_LABEL.to_string(),
            version: Self::registry_version()?,
            compliance_tag: Self::REGISTRY_COMPLIANCE_TAG.to_string(),
        })
    }
}

/// Identity of a calibration registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryInfo {
    pub id: Uuid,
    pub label: String,
    pub version: semver::Version,
    pub compliance_tag: String,
}

/// Parse a textual UUID, mapping failures into a construction error.
pub fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| CalibrationError::InvalidIdentifier(format!("{raw}: {e}")))
}
