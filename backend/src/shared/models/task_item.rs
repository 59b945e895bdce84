use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    task_add_request::TaskAddRequest, task_edit_request::TaskEditRequest,
    task_priority::TaskPriority, task_status::TaskStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub estimated_deadline: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_by_user_id: u64,
    pub assigned_to_user_id: u64,
    pub created_at: DateTime<Utc>,
}

impl TaskItem {
    /// New tasks always start in `ToDo`.
    pub fn new(request: TaskAddRequest, creator_id: u64) -> Self {
        Self {
            id: 0,
            title: request.title,
            description: request.description,
            estimated_deadline: request.estimated_deadline,
            priority: request.priority,
            status: TaskStatus::ToDo,
            created_by_user_id: request.created_by_user_id.unwrap_or(creator_id),
            assigned_to_user_id: request.assigned_to_user_id,
            created_at: Utc::now(),
        }
    }

    /// Partial update: absent fields and blank strings leave the task untouched.
    pub fn apply(&mut self, request: TaskEditRequest) {
        if let Some(title) = request.title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        if let Some(description) = request.description.filter(|d| !d.trim().is_empty()) {
            self.description = Some(description);
        }
        if let Some(deadline) = request.estimated_deadline {
            self.estimated_deadline = Some(deadline);
        }
        if let Some(priority) = request.priority {
            self.priority = priority;
        }
        if let Some(status) = request.status {
            self.status = status;
        }
        if let Some(assignee) = request.assigned_to_user_id {
            self.assigned_to_user_id = assignee;
        }
    }
}
