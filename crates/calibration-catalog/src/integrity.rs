//! Referential-integrity check between profiles and device families
//!
//! Profiles name their family by code only. This module reports profiles
//! whose code resolves to no family, and family codes defined more than once.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::service::CalibrationDescriptorService;

/// Which profile table a dangling reference was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileKind {
    BodyTracking,
    Biosense,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::BodyTracking => "BodyTrackingCalibrationProfile",
            ProfileKind::Biosense => "BiosenseCalibrationProfile",
        }
    }
}

/// A profile whose `family_code` matches no device family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingFamilyCode {
    pub profile_kind: ProfileKind,
    pub profile_id: Uuid,
    pub family_code: String,
}

/// Outcome of [`check_referential_integrity`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub dangling: Vec<DanglingFamilyCode>,
    /// Family codes that appear on more than one device family
    pub duplicate_family_codes: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_family_codes.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.dangling.len() + self.duplicate_family_codes.len()
    }
}

impl std::fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_clean() {
            return f.write_str("no issues");
        }
        let mut parts = Vec::with_capacity(self.issue_count());
        for d in &self.dangling {
            parts.push(format!(
                "{} {} references unknown family {}",
                d.profile_kind.as_str(),
                d.profile_id,
                d.family_code
            ));
        }
        for code in &self.duplicate_family_codes {
            parts.push(format!("family code {code} defined more than once"));
        }
        f.write_str(&parts.join("; "))
    }
}

/// Check every profile's family code against the device-family table.
///
/// Never fails; callers decide what to do with a non-clean report.
pub fn check_referential_integrity<S>(service: &S) -> IntegrityReport
where
    S: CalibrationDescriptorService + ?Sized,
{
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for family in service.list_device_families() {
        *seen.entry(family.family_code.as_str()).or_default() += 1;
    }
    let known: HashSet<&str> = seen.keys().copied().collect();

    let mut report = IntegrityReport::default();

    // Keep catalog order for duplicates so reports are stable.
    for family in service.list_device_families() {
        let code = family.family_code.as_str();
        if seen.get(code).copied().unwrap_or(0) > 1
            && !report.duplicate_family_codes.iter().any(|c| c == code)
        {
            warn!(family_code = code, "Duplicate device family code");
            report.duplicate_family_codes.push(code.to_string());
        }
    }

    for profile in service.list_bodytrack_profiles() {
        if !known.contains(profile.family_code.as_str()) {
            warn!(
                profile_id = %profile.id,
                family_code = profile.family_code.as_str(),
                "Body-tracking profile references unknown device family"
            );
            report.dangling.push(DanglingFamilyCode {
                profile_kind: ProfileKind::BodyTracking,
                profile_id: profile.id,
                family_code: profile.family_code.clone(),
            });
        }
    }

    for profile in service.list_biosense_profiles() {
        if !known.contains(profile.family_code.as_str()) {
            warn!(
                profile_id = %profile.id,
                family_code = profile.family_code.as_str(),
                "Biosense profile references unknown device family"
            );
            report.dangling.push(DanglingFamilyCode {
                profile_kind: ProfileKind::Biosense,
                profile_id: profile.id,
                family_code: profile.family_code.clone(),
            });
        }
    }

    info!(
        dangling = report.dangling.len(),
        duplicates = report.duplicate_family_codes.len(),
        "Referential integrity check complete"
    );
    report
}
