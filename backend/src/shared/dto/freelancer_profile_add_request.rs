use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerProfileAddRequest {
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    pub hourly_rate: BigDecimal,
    pub availability: String,
    pub working_hours: String,
    pub summary: Option<String>,
    pub past_projects: Option<String>,
}
