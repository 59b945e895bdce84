use serde::{Deserialize, Serialize};

use crate::request_status::RequestStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequestStatusRequest {
    pub status: RequestStatus,
}
