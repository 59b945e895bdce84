use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::log_status::LogStatus;

/// Elapsed-time record of a freelancer working on a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    pub id: u64,
    pub freelancer_id: u64,
    pub task_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: LogStatus,
}

impl WorkLog {
    pub fn start(freelancer_id: u64, task_id: u64, start_time: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            freelancer_id,
            task_id,
            start_time,
            end_time: None,
            status: LogStatus::Running,
        }
    }

    pub fn stop(&mut self, end_time: DateTime<Utc>) {
        self.end_time = Some(end_time);
        self.status = LogStatus::Stopped;
    }

    /// Whole minutes between start and end, `None` while still running.
    pub fn elapsed_minutes(&self) -> Option<i64> {
        self.end_time.map(|end| (end - self.start_time).num_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn stop_records_end_and_elapsed() {
        let start = Utc::now();
        let mut log = WorkLog::start(1, 2, start);
        assert_eq!(log.elapsed_minutes(), None);

        log.stop(start + Duration::minutes(95));
        assert_eq!(log.status, LogStatus::Stopped);
        assert_eq!(log.elapsed_minutes(), Some(95));
    }
}
