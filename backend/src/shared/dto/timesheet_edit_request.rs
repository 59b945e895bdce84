use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::approval_status::ApprovalStatus;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEditRequest {
    pub project_name: Option<String>,
    pub freelancer_name: Option<String>,
    pub date_of_work: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub work_description: Option<String>,
    pub hourly_rate: Option<BigDecimal>,
    pub approval_status: Option<ApprovalStatus>,
    pub reviewer_comments: Option<String>,
}
