//! Projection core of the shift planner: staff directory derivation,
//! shift-to-calendar-event projection, draft assembly for the create/edit
//! workflow, and export sinks for client-side schedule renderings.

pub mod draft;
pub mod error;
pub mod export;
pub mod palette;
pub mod planner;
pub mod projection;
pub mod roster;
