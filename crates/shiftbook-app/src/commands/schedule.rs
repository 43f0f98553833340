//! Shift planner commands.

use std::fs::File;
use std::io::Write;

use shiftbook_client::client::ApiClient;
use shiftbook_core::model::time;
use shiftbook_service::draft::ShiftDraft;
use shiftbook_service::export::{CsvExporter, ExportSink, TextTableExporter};
use shiftbook_service::planner::Planner;
use shiftbook_service::projection::CalendarEvent;

use crate::cli::{ExportFormat, ScheduleCommand};
use crate::error::{AppError, AppResult};
use crate::render;

pub async fn dispatch(client: &ApiClient, command: ScheduleCommand) -> AppResult<()> {
    match command {
        ScheduleCommand::Show => show(client).await,
        ScheduleCommand::Add {
            employee,
            start,
            end,
            notes,
            color,
        } => add(client, employee, &start, &end, notes, color).await,
        ScheduleCommand::Edit {
            id,
            employee,
            start,
            end,
            notes,
            color,
        } => edit(client, id, employee, start, end, notes, color).await,
        ScheduleCommand::Rm { id } => remove(client, id).await,
        ScheduleCommand::Export { format, out } => export(client, format, out).await,
    }
}

/// Fetches both collections with the requests in flight concurrently; the
/// projection only runs once both have resolved. A failed fetch leaves the
/// affected collection empty and reports a banner.
async fn load_planner(client: &ApiClient) -> Planner {
    let (employees, shifts) = tokio::join!(client.employees(), client.shifts());

    let employees = match employees {
        Ok(employees) => employees,
        Err(error) => {
            tracing::error!(error = %error, "Failed to load employees");
            render::error_banner("Failed to load employees. Please try again later.");
            Vec::new()
        }
    };
    let shifts = match shifts {
        Ok(shifts) => shifts,
        Err(error) => {
            tracing::error!(error = %error, "Failed to load schedules");
            render::error_banner("Failed to load schedules. Please try again later.");
            Vec::new()
        }
    };

    let mut planner = Planner::new();
    planner.replace_employees(employees);
    planner.replace_shifts(shifts);
    planner
}

async fn show(client: &ApiClient) -> AppResult<()> {
    let planner = load_planner(client).await;
    render::staff_legend(planner.staff());
    render::event_table(&planner.events());
    Ok(())
}

async fn add(
    client: &ApiClient,
    employee: String,
    start: &str,
    end: &str,
    notes: Option<String>,
    color: Option<String>,
) -> AppResult<()> {
    let draft = ShiftDraft {
        employee_id: employee,
        start: time::parse_timestamp(start)?,
        end: time::parse_timestamp(end)?,
        notes,
        color,
    };
    let shift = draft.into_shift(None)?;
    client.save_shift(&shift).await?;
    println!("Shift saved");

    // the write path mirrors the read path: refetch and show
    show(client).await
}

async fn edit(
    client: &ApiClient,
    id: i64,
    employee: Option<String>,
    start: Option<String>,
    end: Option<String>,
    notes: Option<String>,
    color: Option<String>,
) -> AppResult<()> {
    let shifts = client.shifts().await?;
    let existing = shifts
        .iter()
        .find(|shift| shift.id == Some(id))
        .ok_or_else(|| AppError::NotFound(format!("shift {id}")))?;

    let draft = ShiftDraft {
        employee_id: employee.unwrap_or_else(|| existing.employee_id.clone()),
        start: match start {
            Some(raw) => time::parse_timestamp(&raw)?,
            None => existing.start_time,
        },
        end: match end {
            Some(raw) => time::parse_timestamp(&raw)?,
            None => existing.end_time,
        },
        notes: notes.or_else(|| existing.notes.clone()),
        color: color.or_else(|| existing.assigned_color.clone()),
    };
    let shift = draft.into_shift(Some(existing))?;
    client.save_shift(&shift).await?;
    println!("Shift {id} updated");

    show(client).await
}

async fn remove(client: &ApiClient, id: i64) -> AppResult<()> {
    client.delete_shift(id).await?;
    println!("Shift {id} deleted");

    show(client).await
}

async fn export(
    client: &ApiClient,
    format: ExportFormat,
    out: Option<std::path::PathBuf>,
) -> AppResult<()> {
    // an export needs both collections; failures abort instead of silently
    // rendering an empty document
    let (employees, shifts) = tokio::join!(client.employees(), client.shifts());
    let (employees, shifts) = (employees?, shifts?);

    let mut planner = Planner::new();
    planner.replace_employees(employees);
    planner.replace_shifts(shifts);
    let events = planner.events();

    match out {
        Some(path) => {
            let file = File::create(&path)?;
            run_export(format, &events, file)?;
            println!("Exported {} events to {}", events.len(), path.display());
        }
        None => run_export(format, &events, std::io::stdout().lock())?,
    }
    Ok(())
}

fn run_export<W: Write>(format: ExportFormat, events: &[CalendarEvent], writer: W) -> AppResult<()> {
    match format {
        ExportFormat::Csv => CsvExporter::new(writer).export(events)?,
        ExportFormat::Text => TextTableExporter::new(writer).export(events)?,
    }
    Ok(())
}
