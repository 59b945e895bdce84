use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignmentAddRequest {
    pub project_id: u64,
    pub freelancer_id: u64,
}
