use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::time;

/// Scheduled work interval assigned to an employee.
///
/// Identity is server-assigned: `id` is `None` until the record has been
/// persisted, and presence of the id alone decides create-vs-update on the
/// save path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee_id: String,
    #[serde(with = "time")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "time")]
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned_color: Option<String>,
    #[serde(default)]
    pub status: bool,
}
