use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSendRequest {
    pub receiver_id: u64,
    pub content: String,
    pub upload: Option<String>,
}
