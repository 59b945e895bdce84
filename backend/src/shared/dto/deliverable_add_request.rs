use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableAddRequest {
    pub project_id: u64,
    #[serde(default)]
    pub upload_files: Vec<String>,
    pub comment: Option<String>,
    pub status: Option<String>,
}
