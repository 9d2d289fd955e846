use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalibrationError, Result};

/// Kind of site where a calibration is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityType {
    Hospital,
    Lab,
    Rehab,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "HOSPITAL",
            FacilityType::Lab => "LAB",
            FacilityType::Rehab => "REHAB",
        }
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staffing and traceability requirements for calibrating at a facility type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationLogisticsProfile {
    pub id: Uuid,
    pub facility_type: FacilityType,
    pub description: String,
    pub min_staff_trained: u32,
    pub requires_dedicated_room: bool,
    pub requires_force_plate_or_phantom: bool,
    pub requires_traceable_id: bool,
    pub requires_audit_log: bool,
}

impl CalibrationLogisticsProfile {
    pub fn builder() -> CalibrationLogisticsProfileBuilder {
        CalibrationLogisticsProfileBuilder::default()
    }
}

/// Builder for [`CalibrationLogisticsProfile`].
#[derive(Debug, Default)]
pub struct CalibrationLogisticsProfileBuilder {
    id: Option<Uuid>,
    facility_type: Option<FacilityType>,
    description: Option<String>,
    min_staff_trained: Option<u32>,
    requires_dedicated_room: bool,
    requires_force_plate_or_phantom: bool,
    requires_traceable_id: bool,
    requires_audit_log: bool,
}

impl CalibrationLogisticsProfileBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn facility_type(mut self, facility: FacilityType) -> Self {
        self.facility_type = Some(facility);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn min_staff_trained(mut self, count: u32) -> Self {
        self.min_staff_trained = Some(count);
        self
    }

    pub fn requires_dedicated_room(mut self, value: bool) -> Self {
        self.requires_dedicated_room = value;
        self
    }

    pub fn requires_force_plate_or_phantom(mut self, value: bool) -> Self {
        self.requires_force_plate_or_phantom = value;
        self
    }

    pub fn requires_traceable_id(mut self, value: bool) -> Self {
        self.requires_traceable_id = value;
        self
    }

    pub fn requires_audit_log(mut self, value: bool) -> Self {
        self.requires_audit_log = value;
        self
    }

    pub fn build(self) -> Result<CalibrationLogisticsProfile> {
        const ENTITY: &str = "CalibrationLogisticsProfile";

        Ok(CalibrationLogisticsProfile {
            id: self.id.ok_or_else(|| CalibrationError::missing(ENTITY, "id"))?,
            facility_type: self
                .facility_type
                .ok_or_else(|| CalibrationError::missing(ENTITY, "facility_type"))?,
            description: self
                .description
                .ok_or_else(|| CalibrationError::missing(ENTITY, "description"))?,
            min_staff_trained: self
                .min_staff_trained
                .ok_or_else(|| CalibrationError::missing(ENTITY, "min_staff_trained"))?,
            requires_dedicated_room: self.requires_dedicated_room,
            requires_force_plate_or_phantom: self.requires_force_plate_or_phantom,
            requires_traceable_id: self.requires_traceable_id,
            requires_audit_log: self.requires_audit_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rehab_profile() {
        let profile = CalibrationLogisticsProfile::builder()
            .id(Uuid::from_u128(9))
            .facility_type(FacilityType::Rehab)
            .description("outpatient rehab")
            .min_staff_trained(1)
            .requires_traceable_id(true)
            .build()
            .unwrap();
        assert_eq!(profile.facility_type, FacilityType::Rehab);
        assert!(profile.requires_traceable_id);
        assert!(!profile.requires_audit_log);
    }

    #[test]
    fn missing_facility_type_fails_fast() {
        let err = CalibrationLogisticsProfile::builder()
            .id(Uuid::from_u128(9))
            .description("where?")
            .min_staff_trained(1)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::MissingField { field: "facility_type", .. }
        ));
    }

    #[test]
    fn facility_type_roundtrips_through_json() {
        let json = serde_json::to_string(&FacilityType::Hospital).unwrap();
        assert_eq!(json, "\"HOSPITAL\"");
        let back: FacilityType = serde_json::from_str("\"REHAB\"").unwrap();
        assert_eq!(back, FacilityType::Rehab);
    }
}
