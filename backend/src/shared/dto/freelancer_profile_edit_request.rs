use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerProfileEditRequest {
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub hourly_rate: Option<BigDecimal>,
    pub availability: Option<String>,
    pub working_hours: Option<String>,
    pub avg_rating: Option<BigDecimal>,
    pub summary: Option<String>,
    pub past_projects: Option<String>,
}
