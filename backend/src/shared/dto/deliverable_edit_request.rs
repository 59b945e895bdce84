use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableEditRequest {
    pub upload_files: Option<Vec<String>>,
    pub comment: Option<String>,
    pub status: Option<String>,
}
