use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{payment_status::PaymentStatus, payment_type::PaymentType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAddRequest {
    pub project_id: u64,
    pub freelancer_id: u64,
    pub client_id: Option<u64>,
    pub payment_type: Option<PaymentType>,
    pub milestone_id: Option<u64>,
    pub timesheet_id: Option<u64>,
    pub amount: BigDecimal,
    pub payment_date: Option<DateTime<Utc>>,
    pub status: Option<PaymentStatus>,
    pub transaction_reference: Option<String>,
}
