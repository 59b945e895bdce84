use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAddRequest {
    pub project_id: u64,
    pub freelancer_id: u64,
    pub review: String,
    pub rating: String,
}
