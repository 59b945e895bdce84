use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetReviewRequest {
    pub reviewer_comments: Option<String>,
}
