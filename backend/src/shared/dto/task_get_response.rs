use serde::{Deserialize, Serialize};

use crate::{subtask::Subtask, task_item::TaskItem, user_summary::UserSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGetResponse {
    #[serde(flatten)]
    pub task: TaskItem,
    pub subtasks: Vec<Subtask>,
    pub created_by: Option<UserSummary>,
    pub assigned_to: Option<UserSummary>,
}
