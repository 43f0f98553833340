//! In-progress shift edits and their persistable form.

use chrono::{DateTime, Utc};
use shiftbook_core::model::{Shift, time};

use crate::error::{ServiceError, ServiceResult};
use crate::palette::DEFAULT_COLOR;

/// Form state for the create/edit workflow: the fields a user fills in
/// before saving a shift.
#[derive(Debug, Clone)]
pub struct ShiftDraft {
    pub employee_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

impl ShiftDraft {
    /// ## Summary
    /// Assembles the persistable shift record. Carries the id of `existing`
    /// when editing, so the save path issues an update; a fresh draft leaves
    /// the id unset and the server assigns one.
    ///
    /// Only presence is validated. End-before-start and double-booking are
    /// accepted as-is; the server owns any further validation.
    ///
    /// ## Errors
    /// Returns a validation error when no employee is selected.
    pub fn into_shift(self, existing: Option<&Shift>) -> ServiceResult<Shift> {
        if self.employee_id.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "an employee must be selected".to_string(),
            ));
        }

        Ok(Shift {
            id: existing.and_then(|shift| shift.id),
            employee_id: self.employee_id,
            title: Some(format!(
                "{} - {}",
                time::clock_label(&self.start),
                time::clock_label(&self.end)
            )),
            start_time: self.start,
            end_time: self.end,
            notes: self.notes,
            assigned_color: Some(self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string())),
            status: true,
        })
    }
}
