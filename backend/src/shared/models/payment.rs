use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{payment_add_request::PaymentAddRequest, payment_status::PaymentStatus, payment_type::PaymentType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: u64,
    pub project_id: u64,
    pub freelancer_id: u64,
    pub client_id: Option<u64>,
    pub payment_type: Option<PaymentType>,
    pub milestone_id: Option<u64>,
    pub timesheet_id: Option<u64>,
    pub amount: BigDecimal,
    pub payment_date: DateTime<Utc>,
    pub status: PaymentStatus,
    pub transaction_reference: Option<String>,
}

impl Payment {
    /// `client_id` falls back to the caller when the body leaves it out.
    pub fn new(request: PaymentAddRequest, caller_id: u64) -> Self {
        Self {
            id: 0,
            project_id: request.project_id,
            freelancer_id: request.freelancer_id,
            client_id: Some(request.client_id.unwrap_or(caller_id)),
            payment_type: request.payment_type,
            milestone_id: request.milestone_id,
            timesheet_id: request.timesheet_id,
            amount: request.amount,
            payment_date: request.payment_date.unwrap_or_else(Utc::now),
            status: request.status.unwrap_or_default(),
            transaction_reference: request.transaction_reference,
        }
    }
}
