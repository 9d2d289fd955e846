//! # calibration-catalog
//!
//! Static reference catalog of calibration requirements for body-tracking
//! and biosensing devices, served through a read-only accessor.
//!
//! ## Reference Data
//!
//! - **Device families**: `MOCAP_OPTICAL`, `IMU_BODY`, `MULTIPLEX_BIOSENSE`
//! - **Body-tracking profiles**: optical wand-grid and IMU anatomical calibration
//! - **Biosense profile**: multiplexed analytes with traceable controls
//! - **Logistics profiles**: hospital and research-lab requirements
//!
//! The catalog is built once per process and never mutated. Listings are
//! shared slices, so callers see a read-only view.
//!
//! ## Guards
//!
//! Three pure predicates check profiles against the registry ceilings:
//!
//! - [`optical_mocap_within_guard`]: optical family, RMS ceiling ≤ 2.0 mm
//! - [`biosense_bias_within_guard`]: bias ceiling ≤ 5.0 %
//! - [`logistics_traceability_guard`]: traceable ID and audit log both required
//!
//! ## Referential Integrity
//!
//! Profiles refer to their device family by code. The reference catalog is
//! consistent, but the check is permissive by default for caller-supplied
//! catalogs. Set `enforce_referential_integrity` in [`CatalogConfig`] to
//! reject dangling codes.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod canonical;
pub mod config;
pub mod error;
pub mod guards;
pub mod integrity;
pub mod service;
pub mod snapshot;
pub mod telemetry;

pub use canonical::{
    reference_catalog, ReferenceCatalog, IMU_BODY, MOCAP_OPTICAL, MULTIPLEX_BIOSENSE,
};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use guards::{
    biosense_bias_within_guard, evaluate_guards, logistics_traceability_guard,
    optical_mocap_within_guard, GuardKind, GuardOutcome, GuardReport,
};
pub use integrity::{check_referential_integrity, DanglingFamilyCode, IntegrityReport, ProfileKind};
pub use service::{CalibrationDescriptorService, InMemoryCalibrationDescriptorService};
pub use snapshot::CatalogSnapshot;
pub use telemetry::{init_tracing, TracingConfig};

// Record types, so consumers need only one dependency.
pub use calibration_types::{
    BiosenseCalibrationProfile, BodyTrackingCalibrationProfile, CalibrationConstants,
    CalibrationError, CalibrationLogisticsProfile, CalibrationRecord, DeviceClass,
    DeviceFamilyProfile, FacilityType, RegistryInfo,
};
