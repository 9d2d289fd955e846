use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::CalibrationConstants;
use crate::error::{CalibrationError, Result};

/// Traceability transcript for one calibration event.
///
/// This crate only defines the shape; storing records is the job of the
/// surrounding application. `notes` must never carry patient-identifying
/// health information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    pub record_id: Uuid,
    pub equipment_id: Uuid,
    pub performed_on: NaiveDate,
    /// Role of the performer (never a personal name)
    pub performed_by_role: String,
    pub profile_family_code: String,
    pub passed: bool,
    #[serde(default)]
    pub notes: String,
}

impl CalibrationRecord {
    pub fn builder() -> CalibrationRecordBuilder {
        CalibrationRecordBuilder::default()
    }

    /// Date the next calibration falls due, or `None` if it overflows the calendar.
    pub fn next_due(&self, interval_days: u32) -> Option<NaiveDate> {
        self.performed_on
            .checked_add_days(Days::new(u64::from(interval_days)))
    }

    /// Date the next calibration falls due under the registry-wide ceiling.
    pub fn next_due_default(&self) -> Option<NaiveDate> {
        self.next_due(CalibrationConstants::MAX_CAL_INTERVAL_DAYS)
    }

    /// A record is overdue once `as_of` is strictly past its due date.
    pub fn is_overdue(&self, as_of: NaiveDate, interval_days: u32) -> bool {
        match self.next_due(interval_days) {
            Some(due) => as_of > due,
            None => false,
        }
    }
}

/// Builder for [`CalibrationRecord`]. `notes` defaults to the empty string.
#[derive(Debug, Default)]
pub struct CalibrationRecordBuilder {
    record_id: Option<Uuid>,
    equipment_id: Option<Uuid>,
    performed_on: Option<NaiveDate>,
    performed_by_role: Option<String>,
    profile_family_code: Option<String>,
    passed: Option<bool>,
    notes: Option<String>,
}

impl CalibrationRecordBuilder {
    pub fn record_id(mut self, id: Uuid) -> Self {
        self.record_id = Some(id);
        self
    }

    pub fn equipment_id(mut self, id: Uuid) -> Self {
        self.equipment_id = Some(id);
        self
    }

    pub fn performed_on(mut self, date: NaiveDate) -> Self {
        self.performed_on = Some(date);
        self
    }

    pub fn performed_by_role(mut self, role: impl Into<String>) -> Self {
        self.performed_by_role = Some(role.into());
        self
    }

    pub fn profile_family_code(mut self, code: impl Into<String>) -> Self {
        self.profile_family_code = Some(code.into());
        self
    }

    pub fn passed(mut self, passed: bool) -> Self {
        self.passed = Some(passed);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<CalibrationRecord> {
        const ENTITY: &str = "CalibrationRecord";

        Ok(CalibrationRecord {
            record_id: self
                .record_id
                .ok_or_else(|| CalibrationError::missing(ENTITY, "record_id"))?,
            equipment_id: self
                .equipment_id
                .ok_or_else(|| CalibrationError::missing(ENTITY, "equipment_id"))?,
            performed_on: self
                .performed_on
                .ok_or_else(|| CalibrationError::missing(ENTITY, "performed_on"))?,
            performed_by_role: self
                .performed_by_role
                .ok_or_else(|| CalibrationError::missing(ENTITY, "performed_by_role"))?,
            profile_family_code: self
                .profile_family_code
                .ok_or_else(|| CalibrationError::missing(ENTITY, "profile_family_code"))?,
            passed: self
                .passed
                .ok_or_else(|| CalibrationError::missing(ENTITY, "passed"))?,
            notes: self.notes.unwrap_or_default(),
        })
    }
}
