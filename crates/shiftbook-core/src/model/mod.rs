//! Wire data model for the scheduling service's JSON contract.

pub mod employee;
pub mod position;
pub mod shift;
pub mod time;

pub use employee::{Employee, NewEmployee};
pub use position::{NewPosition, Position};
pub use shift::Shift;
