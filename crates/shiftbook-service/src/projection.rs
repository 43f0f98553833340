//! Shift-to-calendar-event projection.

use chrono::{DateTime, Utc};
use shiftbook_core::model::{Shift, time};

use crate::palette::DEFAULT_COLOR;
use crate::roster::StaffEntry;

/// Display name substituted when a shift references no known employee.
pub const UNASSIGNED: &str = "Unassigned";

/// Render-only projection of a shift for the calendar surface. Ephemeral:
/// rebuilt on every render pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub shift_id: Option<i64>,
    pub employee_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub title: String,
    pub color: String,
    pub notes: Option<String>,
}

/// ## Summary
/// Projects each shift to exactly one calendar event, decorated from the
/// staff directory. Pure: identical inputs yield identical output, order
/// preserved, inputs untouched.
///
/// Overlapping shifts project independently; there is no merging and no
/// double-booking detection.
#[must_use]
pub fn project_events(shifts: &[Shift], directory: &[StaffEntry]) -> Vec<CalendarEvent> {
    shifts
        .iter()
        .map(|shift| {
            let entry = directory.iter().find(|entry| entry.id == shift.employee_id);
            let name = entry.map_or(UNASSIGNED, |entry| entry.name.as_str());
            let color = entry.map_or(DEFAULT_COLOR, |entry| entry.color.as_str());

            CalendarEvent {
                shift_id: shift.id,
                employee_id: shift.employee_id.clone(),
                start: shift.start_time,
                end: shift.end_time,
                title: format!(
                    "{name} ({} - {})",
                    time::clock_label(&shift.start_time),
                    time::clock_label(&shift.end_time)
                ),
                color: color.to_string(),
                notes: shift.notes.clone(),
            }
        })
        .collect()
}
