use std::io::Write;

use shiftbook_core::model::time;

use super::ExportSink;
use crate::error::ServiceResult;
use crate::projection::CalendarEvent;

/// Aligned plain-text schedule listing, the print-preview analogue.
pub struct TextTableExporter<W: Write> {
    writer: W,
}

impl<W: Write> TextTableExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for TextTableExporter<W> {
    fn export(&mut self, events: &[CalendarEvent]) -> ServiceResult<()> {
        if events.is_empty() {
            writeln!(self.writer, "(no shifts scheduled)")?;
            self.writer.flush()?;
            return Ok(());
        }

        let title_width = events
            .iter()
            .map(|event| event.title.chars().count())
            .max()
            .unwrap_or(0);

        for event in events {
            writeln!(
                self.writer,
                "{}  {}  {:<title_width$}  {}",
                event.start.format("%Y-%m-%d"),
                time::clock_label(&event.start),
                event.title,
                event.notes.as_deref().unwrap_or(""),
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
