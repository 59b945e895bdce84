use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request_status::RequestStatus;

/// A freelancer asking to join a project. One per (project, freelancer) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub id: u64,
    pub project_id: u64,
    pub freelancer_id: u64,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
}

impl ProjectRequest {
    pub fn new(project_id: u64, freelancer_id: u64) -> Self {
        Self {
            id: 0,
            project_id,
            freelancer_id,
            status: RequestStatus::Pending,
            requested_at: Utc::now(),
        }
    }
}
