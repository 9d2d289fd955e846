use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{CalibrationError, Result};

/// Calibration requirements for a body-tracking device family.
///
/// Deserialization goes through [`BodyTrackingCalibrationProfileBuilder`], so
/// decoded profiles obey the same range checks as built ones.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyTrackingCalibrationProfile {
    pub id: Uuid,
    /// Code of the owning device family (matched by string, not by reference)
    pub family_code: String,
    pub description: String,
    pub min_markers_or_sensors: u32,
    pub max_markers_or_sensors: u32,
    pub requires_full_body_sweep: bool,
    pub requires_quiet_stance: bool,
    pub target_rms_error_mm: f64,
    pub max_allowed_rms_error_mm: f64,
    pub min_calibration_duration_sec: f64,
    pub max_calibration_duration_sec: f64,
}

impl BodyTrackingCalibrationProfile {
    pub fn builder() -> BodyTrackingCalibrationProfileBuilder {
        BodyTrackingCalibrationProfileBuilder::default()
    }

    /// Whether a measured RMS error falls within this profile's ceiling.
    pub fn accepts_rms_error(&self, measured_mm: f64) -> bool {
        measured_mm <= self.max_allowed_rms_error_mm
    }

    pub fn accepts_marker_count(&self, count: u32) -> bool {
        (self.min_markers_or_sensors..=self.max_markers_or_sensors).contains(&count)
    }
}

/// Wire shape of [`BodyTrackingCalibrationProfile`], validated on the way in.
#[derive(Deserialize)]
struct BodyTrackingCalibrationProfileFields {
    id: Uuid,
    family_code: String,
    description: String,
    min_markers_or_sensors: u32,
    max_markers_or_sensors: u32,
    requires_full_body_sweep: bool,
    requires_quiet_stance: bool,
    target_rms_error_mm: f64,
    max_allowed_rms_error_mm: f64,
    min_calibration_duration_sec: f64,
    max_calibration_duration_sec: f64,
}

impl<'de> Deserialize<'de> for BodyTrackingCalibrationProfile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BodyTrackingCalibrationProfileFields::deserialize(deserializer)?;
        BodyTrackingCalibrationProfile::builder()
            .id(raw.id)
            .family_code(raw.family_code)
            .description(raw.description)
            .markers_or_sensors(raw.min_markers_or_sensors, raw.max_markers_or_sensors)
            .requires_full_body_sweep(raw.requires_full_body_sweep)
            .requires_quiet_stance(raw.requires_quiet_stance)
            .rms_error_mm(raw.target_rms_error_mm, raw.max_allowed_rms_error_mm)
            .calibration_duration_sec(
                raw.min_calibration_duration_sec,
                raw.max_calibration_duration_sec,
            )
            .build()
            .map_err(serde::de::Error::custom)
    }
}

/// Builder for [`BodyTrackingCalibrationProfile`].
///
/// All numeric fields are required; range pairs are checked for `min <= max`.
#[derive(Debug, Default)]
pub struct BodyTrackingCalibrationProfileBuilder {
    id: Option<Uuid>,
    family_code: Option<String>,
    description: Option<String>,
    markers_or_sensors: Option<(u32, u32)>,
    requires_full_body_sweep: bool,
    requires_quiet_stance: bool,
    rms_error_mm: Option<(f64, f64)>,
    calibration_duration_sec: Option<(f64, f64)>,
}

impl BodyTrackingCalibrationProfileBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn family_code(mut self, code: impl Into<String>) -> Self {
        self.family_code = Some(code.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn markers_or_sensors(mut self, min: u32, max: u32) -> Self {
        self.markers_or_sensors = Some((min, max));
        self
    }

    pub fn requires_full_body_sweep(mut self, value: bool) -> Self {
        self.requires_full_body_sweep = value;
        self
    }

    pub fn requires_quiet_stance(mut self, value: bool) -> Self {
        self.requires_quiet_stance = value;
        self
    }

    /// Target and maximum allowed RMS error, in millimeters.
    pub fn rms_error_mm(mut self, target: f64, max_allowed: f64) -> Self {
        self.rms_error_mm = Some((target, max_allowed));
        self
    }

    pub fn calibration_duration_sec(mut self, min: f64, max: f64) -> Self {
        self.calibration_duration_sec = Some((min, max));
        self
    }

    pub fn build(self) -> Result<BodyTrackingCalibrationProfile> {
        const ENTITY: &str = "BodyTrackingCalibrationProfile";

        let id = self.id.ok_or_else(|| CalibrationError::missing(ENTITY, "id"))?;
        let family_code = self
            .family_code
            .ok_or_else(|| CalibrationError::missing(ENTITY, "family_code"))?;
        let description = self
            .description
            .ok_or_else(|| CalibrationError::missing(ENTITY, "description"))?;
        let (min_markers, max_markers) = self
            .markers_or_sensors
            .ok_or_else(|| CalibrationError::missing(ENTITY, "markers_or_sensors"))?;
        let (target_rms, max_rms) = self
            .rms_error_mm
            .ok_or_else(|| CalibrationError::missing(ENTITY, "rms_error_mm"))?;
        let (min_duration, max_duration) = self
            .calibration_duration_sec
            .ok_or_else(|| CalibrationError::missing(ENTITY, "calibration_duration_sec"))?;

        CalibrationError::check_range(ENTITY, "markers_or_sensors", min_markers, max_markers)?;
        CalibrationError::check_range(ENTITY, "rms_error_mm", target_rms, max_rms)?;
        CalibrationError::check_range(
            ENTITY,
            "calibration_duration_sec",
            min_duration,
            max_duration,
        )?;

        Ok(BodyTrackingCalibrationProfile {
            id,
            family_code,
            description,
            min_markers_or_sensors: min_markers,
            max_markers_or_sensors: max_markers,
            requires_full_body_sweep: self.requires_full_body_sweep,
            requires_quiet_stance: self.requires_quiet_stance,
            target_rms_error_mm: target_rms,
            max_allowed_rms_error_mm: max_rms,
            min_calibration_duration_sec: min_duration,
            max_calibration_duration_sec: max_duration,
        })
    }
}
