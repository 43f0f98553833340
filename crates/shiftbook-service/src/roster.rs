//! Staff directory derivation.

use shiftbook_core::model::{Employee, Shift};

use crate::palette;

/// Fallback title when an employee record carries no position.
pub const DEFAULT_TITLE: &str = "Staff";

/// Per-employee display row used to decorate calendar events.
///
/// Always rebuilt wholesale from the raw collections, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffEntry {
    pub id: String,
    pub name: String,
    pub title: String,
    pub color: String,
}

/// ## Summary
/// Builds the staff display table from the raw collections: one entry per
/// employee, in input order, inputs untouched.
///
/// The first shift referencing an employee contributes its persisted color
/// when it carries a non-empty one; otherwise the color is resolved from the
/// palette by employee id.
#[must_use]
pub fn build_staff_directory(employees: &[Employee], shifts: &[Shift]) -> Vec<StaffEntry> {
    employees
        .iter()
        .map(|employee| {
            let persisted = shifts
                .iter()
                .find(|shift| shift.employee_id == employee.employee_id)
                .and_then(|shift| shift.assigned_color.as_deref())
                .filter(|color| !color.is_empty());

            StaffEntry {
                id: employee.employee_id.clone(),
                name: employee.display_name(),
                title: employee
                    .position
                    .as_deref()
                    .filter(|title| !title.trim().is_empty())
                    .unwrap_or(DEFAULT_TITLE)
                    .to_string(),
                color: persisted
                    .unwrap_or_else(|| palette::color_for(&employee.employee_id))
                    .to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftbook_core::model::time::parse_timestamp;

    fn employee(id: &str, first: &str, last: &str, position: Option<&str>) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.to_string(),
            position: position.map(str::to_string),
            email: format!("{first}@example.com"),
            status: true,
        }
    }

    fn shift(employee_id: &str, color: Option<&str>) -> Shift {
        Shift {
            id: Some(1),
            employee_id: employee_id.to_string(),
            start_time: parse_timestamp("2024-01-01T09:00").expect("valid"),
            end_time: parse_timestamp("2024-01-01T17:00").expect("valid"),
            title: None,
            notes: None,
            assigned_color: color.map(str::to_string),
            status: true,
        }
    }

    #[test]
    fn test_one_entry_per_employee_in_order() {
        let employees = vec![
            employee("E1", "Ann", "Lee", None),
            employee("E2", "Bo", "Tran", None),
            employee("E3", "Cy", "Nun", None),
        ];
        let directory = build_staff_directory(&employees, &[]);
        assert_eq!(directory.len(), 3);
        let ids: Vec<_> = directory.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E2", "E3"]);
    }

    #[test]
    fn test_persisted_color_wins() {
        let employees = vec![employee("E1", "Ann", "Lee", None)];
        let shifts = vec![shift("E1", Some("#123456"))];
        let directory = build_staff_directory(&employees, &shifts);
        assert_eq!(directory[0].color, "#123456");
    }

    #[test]
    fn test_empty_persisted_color_falls_back_to_palette() {
        let employees = vec![employee("E1", "Ann", "Lee", None)];
        let shifts = vec![shift("E1", Some(""))];
        let directory = build_staff_directory(&employees, &shifts);
        assert_eq!(directory[0].color, palette::color_for("E1"));
    }

    #[test]
    fn test_first_matching_shift_decides() {
        // the first shift for E1 has no color, so synthesis applies even
        // though a later shift carries one
        let employees = vec![employee("E1", "Ann", "Lee", None)];
        let shifts = vec![shift("E1", None), shift("E1", Some("#123456"))];
        let directory = build_staff_directory(&employees, &shifts);
        assert_eq!(directory[0].color, palette::color_for("E1"));
    }

    #[test]
    fn test_title_falls_back_to_staff() {
        let employees = vec![
            employee("E1", "Ann", "Lee", Some("Barista")),
            employee("E2", "Bo", "Tran", None),
            employee("E3", "Cy", "Nun", Some("  ")),
        ];
        let directory = build_staff_directory(&employees, &[]);
        assert_eq!(directory[0].title, "Barista");
        assert_eq!(directory[1].title, DEFAULT_TITLE);
        assert_eq!(directory[2].title, DEFAULT_TITLE);
    }

    #[test]
    fn test_employee_without_shifts_gets_synthesized_color() {
        let employees = vec![employee("E9", "No", "Shift", None)];
        let directory = build_staff_directory(&employees, &[]);
        assert_eq!(directory[0].color, palette::color_for("E9"));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let employees = vec![
            employee("E1", "Ann", "Lee", None),
            employee("E2", "Bo", "Tran", None),
        ];
        let shifts = vec![shift("E2", None)];
        assert_eq!(
            build_staff_directory(&employees, &shifts),
            build_staff_directory(&employees, &shifts)
        );
    }
}
