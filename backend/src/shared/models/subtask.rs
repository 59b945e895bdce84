use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    subtask_add_request::SubtaskAddRequest, subtask_edit_request::SubtaskEditRequest,
    task_status::TaskStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub task_item_id: u64,
}

impl Subtask {
    pub fn new(request: SubtaskAddRequest) -> Self {
        Self {
            id: 0,
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            status: TaskStatus::ToDo,
            task_item_id: request.task_item_id,
        }
    }

    pub fn apply(&mut self, request: SubtaskEditRequest) {
        if let Some(title) = request.title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        if let Some(description) = request.description.filter(|d| !d.trim().is_empty()) {
            self.description = Some(description);
        }
        if let Some(status) = request.status {
            self.status = status;
        }
        if let Some(due_date) = request.due_date {
            self.due_date = Some(due_date);
        }
    }
}
