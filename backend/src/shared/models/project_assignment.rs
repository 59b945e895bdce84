use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub id: u64,
    pub project_id: u64,
    pub freelancer_id: u64,
    pub assigned_at: DateTime<Utc>,
}

impl ProjectAssignment {
    pub fn new(project_id: u64, freelancer_id: u64) -> Self {
        Self {
            id: 0,
            project_id,
            freelancer_id,
            assigned_at: Utc::now(),
        }
    }
}
