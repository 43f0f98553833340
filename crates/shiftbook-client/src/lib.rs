//! Typed client for the remote scheduling service: employee, position and
//! schedule collections plus bearer-token authentication, all over plain
//! JSON/HTTPS.

pub mod auth;
pub mod client;
pub mod employees;
pub mod error;
pub mod positions;
pub mod schedule;
