use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogAddRequest {
    pub task_id: u64,
    pub start_time: Option<DateTime<Utc>>,
}
