use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::milestone_status::MilestoneStatus;

/// Full replacement of a milestone's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneEditRequest {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub freelancer_comments: Option<String>,
    #[serde(default)]
    pub submitted_file_urls: Vec<String>,
    pub submission_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: MilestoneStatus,
}
