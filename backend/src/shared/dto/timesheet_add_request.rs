use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetAddRequest {
    pub project_name: String,
    pub freelancer_name: String,
    pub date_of_work: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub work_description: String,
    pub hourly_rate: BigDecimal,
}
