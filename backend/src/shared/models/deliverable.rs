use serde::{Deserialize, Serialize};

use crate::{deliverable_add_request::DeliverableAddRequest, deliverable_edit_request::DeliverableEditRequest};

pub const DEFAULT_DELIVERABLE_STATUS: &str = "Pending";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: u64,
    pub project_id: u64,
    #[serde(default)]
    pub upload_files: Vec<String>,
    pub comment: String,
    pub status: String,
}

impl Deliverable {
    pub fn new(request: DeliverableAddRequest) -> Self {
        Self {
            id: 0,
            project_id: request.project_id,
            upload_files: request.upload_files,
            comment: request.comment.unwrap_or_default(),
            status: request
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DELIVERABLE_STATUS.to_string()),
        }
    }

    pub fn apply(&mut self, request: DeliverableEditRequest) {
        if let Some(files) = request.upload_files {
            self.upload_files = files;
        }
        if let Some(comment) = request.comment {
            self.comment = comment;
        }
        if let Some(status) = request.status.filter(|s| !s.trim().is_empty()) {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let d = Deliverable::new(DeliverableAddRequest {
            project_id: 1,
            upload_files: vec![],
            comment: None,
            status: Some("".into()),
        });
        assert_eq!(d.status, DEFAULT_DELIVERABLE_STATUS);
        assert_eq!(d.comment, "");
    }
}
