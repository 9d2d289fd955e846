use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::constants::CalibrationConstants;
use crate::error::{CalibrationError, Result};

/// Calibration requirements for a multi-analyte biosensing family.
///
/// Deserialization goes through [`BiosenseCalibrationProfileBuilder`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BiosenseCalibrationProfile {
    pub id: Uuid,
    pub family_code: String,
    pub description: String,
    pub min_analytes: u32,
    pub max_analytes: u32,
    pub requires_reference_controls: bool,
    pub requires_temp_compensation: bool,
    pub target_bias_pct: f64,
    pub max_allowed_bias_pct: f64,
    /// Coefficient of variation (repeatability), percent
    pub target_cv_pct: f64,
    pub max_allowed_cv_pct: f64,
    pub max_interval_days: u32,
}

impl BiosenseCalibrationProfile {
    pub fn builder() -> BiosenseCalibrationProfileBuilder {
        BiosenseCalibrationProfileBuilder::default()
    }
}

#[derive(Deserialize)]
struct BiosenseCalibrationProfileFields {
    id: Uuid,
    family_code: String,
    description: String,
    min_analytes: u32,
    max_analytes: u32,
    requires_reference_controls: bool,
    requires_temp_compensation: bool,
    target_bias_pct: f64,
    max_allowed_bias_pct: f64,
    target_cv_pct: f64,
    max_allowed_cv_pct: f64,
    max_interval_days: u32,
}

impl<'de> Deserialize<'de> for BiosenseCalibrationProfile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BiosenseCalibrationProfileFields::deserialize(deserializer)?;
        BiosenseCalibrationProfile::builder()
            .id(raw.id)
            .family_code(raw.family_code)
            .description(raw.description)
            .analytes(raw.min_analytes, raw.max_analytes)
            .requires_reference_controls(raw.requires_reference_controls)
            .requires_temp_compensation(raw.requires_temp_compensation)
            .bias_pct(raw.target_bias_pct, raw.max_allowed_bias_pct)
            .cv_pct(raw.target_cv_pct, raw.max_allowed_cv_pct)
            .max_interval_days(raw.max_interval_days)
            .build()
            .map_err(serde::de::Error::custom)
    }
}

/// Builder for [`BiosenseCalibrationProfile`].
///
/// `max_interval_days` may not exceed [`CalibrationConstants::MAX_CAL_INTERVAL_DAYS`].
#[derive(Debug, Default)]
pub struct BiosenseCalibrationProfileBuilder {
    id: Option<Uuid>,
    family_code: Option<String>,
    description: Option<String>,
    analytes: Option<(u32, u32)>,
    requires_reference_controls: bool,
    requires_temp_compensation: bool,
    bias_pct: Option<(f64, f64)>,
    cv_pct: Option<(f64, f64)>,
    max_interval_days: Option<u32>,
}

impl BiosenseCalibrationProfileBuilder {
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

    pub fn analytes(mut self, min: u32, max: u32) -> Self {
        self.analytes = Some((min, max));
        self
    }

    pub fn requires_reference_controls(mut self, value: bool) -> Self {
        self.requires_reference_controls = value;
        self
    }

    pub fn requires_temp_compensation(mut self, value: bool) -> Self {
        self.requires_temp_compensation = value;
        self
    }

    pub fn bias_pct(mut self, target: f64, max_allowed: f64) -> Self {
        self.bias_pct = Some((target, max_allowed));
        self
    }

    pub fn cv_pct(mut self, target: f64, max_allowed: f64) -> Self {
        self.cv_pct = Some((target, max_allowed));
        self
    }

    pub fn max_interval_days(mut self, days: u32) -> Self {
        self.max_interval_days = Some(days);
        self
    }

    pub fn build(self) -> Result<BiosenseCalibrationProfile> {
        const ENTITY: &str = "BiosenseCalibrationProfile";

        let id = self.id.ok_or_else(|| CalibrationError::missing(ENTITY, "id"))?;
        let family_code = self
            .family_code
            .ok_or_else(|| CalibrationError::missing(ENTITY, "family_code"))?;
        let description = self
            .description
            .ok_or_else(|| CalibrationError::missing(ENTITY, "description"))?;
        let (min_analytes, max_analytes) = self
            .analytes
            .ok_or_else(|| CalibrationError::missing(ENTITY, "analytes"))?;
        let (target_bias, max_bias) = self
            .bias_pct
            .ok_or_else(|| CalibrationError::missing(ENTITY, "bias_pct"))?;
        let (target_cv, max_cv) = self
            .cv_pct
            .ok_or_else(|| CalibrationError::missing(ENTITY, "cv_pct"))?;
        let max_interval_days = self
            .max_interval_days
            .ok_or_else(|| CalibrationError::missing(ENTITY, "max_interval_days"))?;

        CalibrationError::check_range(ENTITY, "analytes", min_analytes, max_analytes)?;
        CalibrationError::check_range(ENTITY, "bias_pct", target_bias, max_bias)?;
        CalibrationError::check_range(ENTITY, "cv_pct", target_cv, max_cv)?;
        CalibrationError::check_range(
            ENTITY,
            "max_interval_days",
            max_interval_days,
            CalibrationConstants::MAX_CAL_INTERVAL_DAYS,
        )?;

        Ok(BiosenseCalibrationProfile {
            id,
            family_code,
            description,
            min_analytes,
            max_analytes,
            requires_reference_controls: self.requires_reference_controls,
            requires_temp_compensation: self.requires_temp_compensation,
            target_bias_pct: target_bias,
            max_allowed_bias_pct: max_bias,
            target_cv_pct: target_cv,
            max_allowed_cv_pct: max_cv,
            max_interval_days,
        })
    }
}
