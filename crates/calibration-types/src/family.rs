use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalibrationError, Result};

/// Broad class of a calibrated device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceClass {
    BodyTracking,
    Biosensing,
    Imaging,
    Hybrid,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::BodyTracking => "BODY_TRACKING",
            DeviceClass::Biosensing => "BIOSENSING",
            DeviceClass::Imaging => "IMAGING",
            DeviceClass::Hybrid => "HYBRID",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A family of devices sharing calibration requirements.
///
/// `family_code` is the join key that calibration profiles use to refer
/// back to their family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceFamilyProfile {
    pub id: Uuid,
    pub family_code: String,
    pub device_class: DeviceClass,
    /// Ordered modality tags, e.g. `optical`, `imu`
    pub modality_tags: Vec<String>,
    pub description: String,
    pub requires_3d_reference: bool,
    pub requires_physical_phantom: bool,
    pub iso13485_relevant: bool,
}

impl DeviceFamilyProfile {
    pub fn builder() -> DeviceFamilyProfileBuilder {
        DeviceFamilyProfileBuilder::default()
    }

    pub fn has_modality(&self, tag: &str) -> bool {
        self.modality_tags.iter().any(|t| t == tag)
    }
}

/// Builder for [`DeviceFamilyProfile`].
///
/// Identity, code, class and description are required. Flags default to
/// `false` and the tag list defaults to empty.
#[derive(Debug, Default)]
pub struct DeviceFamilyProfileBuilder {
    id: Option<Uuid>,
    family_code: Option<String>,
    device_class: Option<DeviceClass>,
    modality_tags: Vec<String>,
    description: Option<String>,
    requires_3d_reference: bool,
    requires_physical_phantom: bool,
    iso13485_relevant: bool,
}

impl DeviceFamilyProfileBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn family_code(mut self, code: impl Into<String>) -> Self {
        self.family_code = Some(code.into());
        self
    }

    pub fn device_class(mut self, class: DeviceClass) -> Self {
        self.device_class = Some(class);
        self
    }

    pub fn modality_tag(mut self, tag: impl Into<String>) -> Self {
        self.modality_tags.push(tag.into());
        self
    }

    pub fn modality_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modality_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn requires_3d_reference(mut self, value: bool) -> Self {
        self.requires_3d_reference = value;
        self
    }

    pub fn requires_physical_phantom(mut self, value: bool) -> Self {
        self.requires_physical_phantom = value;
        self
    }

    pub fn iso13485_relevant(mut self, value: bool) -> Self {
        self.iso13485_relevant = value;
        self
    }

    pub fn build(self) -> Result<DeviceFamilyProfile> {
        const ENTITY: &str = "DeviceFamilyProfile";

        Ok(DeviceFamilyProfile {
            id: self.id.ok_or_else(|| CalibrationError::missing(ENTITY, "id"))?,
            family_code: self
                .family_code
                .ok_or_else(|| CalibrationError::missing(ENTITY, "family_code"))?,
            device_class: self
                .device_class
                .ok_or_else(|| CalibrationError::missing(ENTITY, "device_class"))?,
            modality_tags: self.modality_tags,
            description: self
                .description
                .ok_or_else(|| CalibrationError::missing(ENTITY, "description"))?,
            requires_3d_reference: self.requires_3d_reference,
            requires_physical_phantom: self.requires_physical_phantom,
            iso13485_relevant: self.iso13485_relevant,
        })
    }
}
