//! Client-side renderings of the projected schedule.
//!
//! Export targets are injected sinks so the projection stays testable without
//! any particular output mechanism attached.

mod csv;
mod table;

pub use csv::CsvExporter;
pub use table::TextTableExporter;

use crate::error::ServiceResult;
use crate::projection::CalendarEvent;

pub trait ExportSink {
    /// ## Summary
    /// Renders the projected event list into the sink.
    ///
    /// ## Errors
    /// Returns an error if writing to the underlying sink fails.
    fn export(&mut self, events: &[CalendarEvent]) -> ServiceResult<()>;
}
