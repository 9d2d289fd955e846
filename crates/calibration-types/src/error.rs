//! Construction-time validation errors

use thiserror::Error;

/// Errors raised while constructing calibration records.
///
/// Every variant is an invalid-argument condition detected at the point of
/// construction; a record that fails validation is never produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("{entity}: required field `{field}` is missing")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: `{field}` out of bounds ({min} must not exceed {max})")]
    InvalidBounds {
        entity: &'static str,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("invalid registry version: {0}")]
    InvalidVersion(String),
}

impl CalibrationError {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        CalibrationError::MissingField { entity, field }
    }

    /// Require `min <= max`; equal bounds are allowed, NaN on either side is not.
    pub(crate) fn check_range<T>(
        entity: &'static str,
        field: &'static str,
        min: T,
        max: T,
    ) -> Result<()>
    where
        T: PartialOrd + Into<f64> + Copy,
    {
        let ordered = matches!(
            min.partial_cmp(&max),
            Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
        );
        if !ordered {
            return Err(CalibrationError::InvalidBounds {
                entity,
                field,
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(())
    }
}

/// Result type for record construction
pub type Result<T> = std::result::Result<T, CalibrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display_names_entity_and_field() {
        let err = CalibrationError::missing("DeviceFamilyProfile", "family_code");
        let s = err.to_string();
        assert!(s.contains("DeviceFamilyProfile"));
        assert!(s.contains("family_code"));
    }

    #[test]
    fn check_range_accepts_equal_bounds() {
        assert!(CalibrationError::check_range("P", "rms", 2.0, 2.0).is_ok());
        assert!(CalibrationError::check_range("P", "markers", 4u32, 32u32).is_ok());
    }

    #[test]
    fn check_range_rejects_inverted_bounds() {
        let err = CalibrationError::check_range("P", "markers", 64u32, 8u32).unwrap_err();
        assert_eq!(
            err,
            CalibrationError::InvalidBounds {
                entity: "P",
                field: "markers",
                min: 64.0,
                max: 8.0,
            }
        );
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn check_range_rejects_nan_on_either_side() {
        assert!(CalibrationError::check_range("P", "rms", f64::NAN, 2.0).is_err());
        assert!(CalibrationError::check_range("P", "rms", 0.5, f64::NAN).is_err());
    }
}
