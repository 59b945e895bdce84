use serde::{Deserialize, Serialize};

/// Kanban column shared by tasks and subtasks.
///
/// Any value may replace any other; there is no transition table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
}
