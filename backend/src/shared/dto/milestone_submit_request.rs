use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSubmitRequest {
    pub submission_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_file_urls: Vec<String>,
    pub freelancer_comments: Option<String>,
}
