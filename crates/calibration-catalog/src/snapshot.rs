use calibration_types::{
    BiosenseCalibrationProfile, BodyTrackingCalibrationProfile, CalibrationConstants,
    CalibrationLogisticsProfile, DeviceFamilyProfile, RegistryInfo,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::service::CalibrationDescriptorService;

/// Owned, serializable copy of a catalog plus its registry identity.
///
/// Intended for handing the catalog to an integrating application as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub registry: RegistryInfo,
    pub device_families: Vec<DeviceFamilyProfile>,
    pub bodytrack_profiles: Vec<BodyTrackingCalibrationProfile>,
    pub biosense_profiles: Vec<BiosenseCalibrationProfile>,
    pub logistics_profiles: Vec<CalibrationLogisticsProfile>,
}

impl CatalogSnapshot {
    pub fn capture<S>(service: &S) -> Result<Self>
    where
        S: CalibrationDescriptorService + ?Sized,
    {
        Ok(Self {
            registry: CalibrationConstants::registry_info()?,
            device_families: service.list_device_families().to_vec(),
            bodytrack_profiles: service.list_bodytrack_profiles().to_vec(),
            biosense_profiles: service.list_biosense_profiles().to_vec(),
            logistics_profiles: service.list_logistics_profiles().to_vec(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
