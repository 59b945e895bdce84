use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task_priority::TaskPriority;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAddRequest {
    pub title: String,
    pub description: Option<String>,
    pub estimated_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Defaults to the caller.
    pub created_by_user_id: Option<u64>,
    pub assigned_to_user_id: u64,
}
