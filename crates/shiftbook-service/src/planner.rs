//! Client-local planner state.
//!
//! The employee and shift collections are snapshots of server state: they are
//! replaced wholesale after a round trip, never edited element-wise, and the
//! staff directory is rebuilt on every replacement.

use shiftbook_core::model::{Employee, Shift};

use crate::projection::{CalendarEvent, project_events};
use crate::roster::{StaffEntry, build_staff_directory};

#[derive(Debug, Default)]
pub struct Planner {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    staff: Vec<StaffEntry>,
}

impl Planner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a fresh employee collection and rebuilds the directory.
    pub fn replace_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.rebuild();
    }

    /// Swaps in a fresh shift collection and rebuilds the directory.
    pub fn replace_shifts(&mut self, shifts: Vec<Shift>) {
        self.shifts = shifts;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.staff = build_staff_directory(&self.employees, &self.shifts);
        tracing::debug!(
            staff = self.staff.len(),
            shifts = self.shifts.len(),
            "Rebuilt staff directory"
        );
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    #[must_use]
    pub fn staff(&self) -> &[StaffEntry] {
        &self.staff
    }

    /// Projects the current shift collection against the cached directory.
    #[must_use]
    pub fn events(&self) -> Vec<CalendarEvent> {
        project_events(&self.shifts, &self.staff)
    }

    #[must_use]
    pub fn find_shift(&self, id: i64) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == Some(id))
    }
}
