use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::timesheet::Timesheet;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetGetResponse {
    #[serde(flatten)]
    pub timesheet: Timesheet,
    pub total_hours: f64,
    pub calculated_amount: BigDecimal,
}

impl From<Timesheet> for TimesheetGetResponse {
    fn from(timesheet: Timesheet) -> Self {
        TimesheetGetResponse {
            total_hours: timesheet.total_hours(),
            calculated_amount: timesheet.calculated_amount(),
            timesheet,
        }
    }
}
