use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::payment_type::PaymentType;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAddRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub required_skills: String,
    pub budget: BigDecimal,
    pub payment_type: Option<PaymentType>,
    pub number_of_freelancers: Option<u32>,
    pub attached_document_path: Option<String>,
}
