use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message_send_request::MessageSendRequest;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub sender_id: u64,
    pub receiver_id: u64,
    pub content: String,
    pub upload: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

impl Message {
    pub fn new(request: MessageSendRequest, sender_id: u64) -> Self {
        Self {
            id: 0,
            sender_id,
            receiver_id: request.receiver_id,
            content: request.content,
            upload: request.upload,
            timestamp: Utc::now(),
            is_read: false,
        }
    }

    pub fn involves(&self, a: u64, b: u64) -> bool {
        (self.sender_id == a && self.receiver_id == b) || (self.sender_id == b && self.receiver_id == a)
    }
}
