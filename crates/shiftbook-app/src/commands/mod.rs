pub mod auth;
pub mod employee;
pub mod position;
pub mod schedule;
