//! Read-only accessor surface over a calibration catalog

use std::sync::Arc;

use calibration_types::{
    BiosenseCalibrationProfile, BodyTrackingCalibrationProfile, CalibrationLogisticsProfile,
    DeviceFamilyProfile, FacilityType,
};
use tracing::{info, warn};

use crate::canonical::{reference_catalog, ReferenceCatalog};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::integrity::check_referential_integrity;

/// Read-only access to calibration descriptors.
///
/// Every listing returns the catalog's table in definition order. Calls are
/// idempotent and cannot fail. Returned slices are shared views; callers
/// cannot mutate the catalog through them.
pub trait CalibrationDescriptorService: Send + Sync {
    fn list_device_families(&self) -> &[DeviceFamilyProfile];

    fn list_bodytrack_profiles(&self) -> &[BodyTrackingCalibrationProfile];

    fn list_biosense_profiles(&self) -> &[BiosenseCalibrationProfile];

    fn list_logistics_profiles(&self) -> &[CalibrationLogisticsProfile];

    /// Look up a device family by its code.
    fn find_device_family(&self, family_code: &str) -> Option<&DeviceFamilyProfile> {
        self.list_device_families()
            .iter()
            .find(|f| f.family_code == family_code)
    }

    /// Body-tracking profiles attached to a family code, in catalog order.
    fn bodytrack_profiles_for(&self, family_code: &str) -> Vec<&BodyTrackingCalibrationProfile> {
        self.list_bodytrack_profiles()
            .iter()
            .filter(|p| p.family_code == family_code)
            .collect()
    }

    fn biosense_profiles_for(&self, family_code: &str) -> Vec<&BiosenseCalibrationProfile> {
        self.list_biosense_profiles()
            .iter()
            .filter(|p| p.family_code == family_code)
            .collect()
    }

    /// First logistics profile for a facility type.
    fn logistics_profile_for(
        &self,
        facility: FacilityType,
    ) -> Option<&CalibrationLogisticsProfile> {
        self.list_logistics_profiles()
            .iter()
            .find(|p| p.facility_type == facility)
    }
}

/// In-memory descriptor service backed by an immutable catalog.
///
/// `new()` serves the process-wide reference catalog. Cloning is cheap; all
/// clones share the same tables.
#[derive(Clone, Debug)]
pub struct InMemoryCalibrationDescriptorService {
    catalog: Arc<ReferenceCatalog>,
}

impl InMemoryCalibrationDescriptorService {
    pub fn new() -> Self {
        Self {
            catalog: reference_catalog(),
        }
    }

    /// Serve a caller-supplied catalog without any integrity checking.
    pub fn from_catalog(catalog: ReferenceCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Serve the reference catalog, checking it against `config`.
    pub fn with_config(config: &CatalogConfig) -> Result<Self> {
        Self::from_catalog_checked(reference_catalog(), config)
    }

    /// Serve `catalog`, running the referential-integrity check first.
    ///
    /// Dangling family codes are logged and tolerated unless
    /// `config.enforce_referential_integrity` is set, in which case the
    /// catalog is rejected.
    pub fn from_catalog_checked(
        catalog: Arc<ReferenceCatalog>,
        config: &CatalogConfig,
    ) -> Result<Self> {
        let service = Self { catalog };
        let report = check_referential_integrity(&service);

        if report.is_clean() {
            info!(
                families = service.catalog.device_families().len(),
                "Calibration catalog passed referential integrity"
            );
            return Ok(service);
        }

        if config.enforce_referential_integrity {
            warn!(
                issues = report.issue_count(),
                "Calibration catalog rejected: referential integrity enforced"
            );
            return Err(CatalogError::Integrity(report));
        }

        warn!(
            issues = report.issue_count(),
            "Calibration catalog has integrity issues; continuing in permissive mode"
        );
        Ok(service)
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }
}

impl Default for InMemoryCalibrationDescriptorService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationDescriptorService for InMemoryCalibrationDescriptorService {
    fn list_device_families(&self) -> &[DeviceFamilyProfile] {
        self.catalog.device_families()
    }

    fn list_bodytrack_profiles(&self) -> &[BodyTrackingCalibrationProfile] {
        self.catalog.bodytrack_profiles()
    }

    fn list_biosense_profiles(&self) -> &[BiosenseCalibrationProfile] {
        self.catalog.biosense_profiles()
    }

    fn list_logistics_profiles(&self) -> &[CalibrationLogisticsProfile] {
        self.catalog.logistics_profiles()
    }
}
