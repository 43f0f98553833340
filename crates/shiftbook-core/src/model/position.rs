use serde::{Deserialize, Serialize};

/// Position/role record as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub position_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
}

/// Create payload for the position collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosition<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}
