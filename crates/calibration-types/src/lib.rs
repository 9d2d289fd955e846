//! # calibration-types
//!
//! Value records describing calibration requirements for body-tracking and
//! biosensing devices used in medical and AR/VR settings.
//!
//! ## Records
//!
//! - **DeviceFamilyProfile**: a device family keyed by its `family_code`
//! - **BodyTrackingCalibrationProfile**: marker counts, RMS error and
//!   duration bounds for optical and IMU tracking
//! - **BiosenseCalibrationProfile**: analyte counts, bias and CV ceilings,
//!   re-calibration interval
//! - **CalibrationLogisticsProfile**: staffing and traceability needs per
//!   facility type
//! - **CalibrationRecord**: traceability transcript of one calibration event
//!
//! Profiles refer to their family by `family_code` string. Nothing in this
//! crate checks that the code resolves; see `calibration-catalog` for the
//! integrity check.
//!
//! Every record has a builder whose `build()` fails fast with
//! [`CalibrationError::MissingField`] when a required field is absent.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod biosense;
pub mod bodytrack;
pub mod constants;
pub mod error;
pub mod family;
pub mod logistics;
pub mod record;

pub use biosense::{BiosenseCalibrationProfile, BiosenseCalibrationProfileBuilder};
pub use bodytrack::{BodyTrackingCalibrationProfile, BodyTrackingCalibrationProfileBuilder};
pub use constants::{parse_id, CalibrationConstants, RegistryInfo};
pub use error::{CalibrationError, Result};
pub use family::{DeviceClass, DeviceFamilyProfile, DeviceFamilyProfileBuilder};
pub use logistics::{CalibrationLogisticsProfile, CalibrationLogisticsProfileBuilder, FacilityType};
pub use record::{CalibrationRecord, CalibrationRecordBuilder};
