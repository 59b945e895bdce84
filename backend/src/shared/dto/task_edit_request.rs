use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{task_priority::TaskPriority, task_status::TaskStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEditRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_deadline: Option<DateTime<Utc>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub assigned_to_user_id: Option<u64>,
}
