use std::io::Write;

use shiftbook_core::model::time;

use super::ExportSink;
use crate::error::ServiceResult;
use crate::projection::CalendarEvent;

/// Comma-separated rendering: a header row plus one row per projected event.
pub struct CsvExporter<W: Write> {
    writer: W,
}

impl<W: Write> CsvExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

impl<W: Write> ExportSink for CsvExporter<W> {
    fn export(&mut self, events: &[CalendarEvent]) -> ServiceResult<()> {
        writeln!(self.writer, "start,end,employee,title,notes")?;
        for event in events {
            writeln!(
                self.writer,
                "{},{},{},{},{}",
                time::format_timestamp(&event.start),
                time::format_timestamp(&event.end),
                field(&event.employee_id),
                field(&event.title),
                field(event.notes.as_deref().unwrap_or("")),
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
