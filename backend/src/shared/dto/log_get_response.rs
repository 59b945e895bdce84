use serde::{Deserialize, Serialize};

use crate::work_log::WorkLog;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGetResponse {
    #[serde(flatten)]
    pub log: WorkLog,
    pub elapsed_minutes: Option<i64>,
}

impl From<WorkLog> for LogGetResponse {
    fn from(log: WorkLog) -> Self {
        LogGetResponse {
            elapsed_minutes: log.elapsed_minutes(),
            log,
        }
    }
}
