//! Plain-text rendering for the terminal surface.

use shiftbook_core::model::{Employee, Position, time};
use shiftbook_service::projection::CalendarEvent;
use shiftbook_service::roster::StaffEntry;

pub fn error_banner(message: &str) {
    eprintln!("error: {message}");
}

pub fn employee_table(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found. Add a new employee to get started.");
        return;
    }

    let rows: Vec<[String; 4]> = employees
        .iter()
        .map(|employee| {
            [
                employee.employee_id.clone(),
                employee.display_name(),
                employee.position.clone().unwrap_or_default(),
                employee.email.clone(),
            ]
        })
        .collect();
    print_columns(&["ID", "NAME", "POSITION", "EMAIL"], &rows);
}

pub fn position_table(positions: &[Position]) {
    if positions.is_empty() {
        println!("No positions found.");
        return;
    }

    let rows: Vec<[String; 4]> = positions
        .iter()
        .map(|position| {
            [
                position.position_id.to_string(),
                position.title.clone(),
                position.description.clone().unwrap_or_default(),
                if position.is_active { "active" } else { "inactive" }.to_string(),
            ]
        })
        .collect();
    print_columns(&["ID", "TITLE", "DESCRIPTION", "STATUS"], &rows);
}

pub fn staff_legend(staff: &[StaffEntry]) {
    for entry in staff {
        println!("{}  {} - {}", entry.color, entry.name, entry.title);
    }
    if !staff.is_empty() {
        println!();
    }
}

/// Events sorted by start time, one line each.
pub fn event_table(events: &[CalendarEvent]) {
    if events.is_empty() {
        println!("No shifts scheduled.");
        return;
    }

    let mut ordered: Vec<&CalendarEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.start);

    let rows: Vec<[String; 4]> = ordered
        .iter()
        .map(|event| {
            [
                event
                    .shift_id
                    .map_or_else(String::new, |id| id.to_string()),
                event.start.format("%Y-%m-%d").to_string(),
                format!(
                    "{} - {}",
                    time::clock_label(&event.start),
                    time::clock_label(&event.end)
                ),
                event.title.clone(),
            ]
        })
        .collect();
    print_columns(&["ID", "DATE", "TIME", "SHIFT"], &rows);
}

fn print_columns<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) {
    let mut widths: [usize; N] = [0; N];
    for (index, header) in headers.iter().enumerate() {
        widths[index] = header.chars().count();
    }
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| format!("{header:<width$}", width = widths[index]))
        .collect();
    println!("{}", header_line.join("  "));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(index, cell)| format!("{cell:<width$}", width = widths[index]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftbook_core::model::time::parse_timestamp;

    #[test]
    fn test_event_ordering_by_start() {
        let make = |id: i64, start: &str| CalendarEvent {
            shift_id: Some(id),
            employee_id: "E1".to_string(),
            start: parse_timestamp(start).expect("valid"),
            end: parse_timestamp(start).expect("valid"),
            title: String::new(),
            color: String::new(),
            notes: None,
        };
        let events = [
            make(2, "2024-01-02T09:00"),
            make(1, "2024-01-01T09:00"),
        ];

        let mut ordered: Vec<&CalendarEvent> = events.iter().collect();
        ordered.sort_by_key(|event| event.start);
        assert_eq!(ordered[0].shift_id, Some(1));
        assert_eq!(ordered[1].shift_id, Some(2));
    }
}
