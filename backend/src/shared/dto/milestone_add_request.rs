use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneAddRequest {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub project_id: u64,
}
