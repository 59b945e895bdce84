use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{payment_type::PaymentType, project_status::ProjectStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEditRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub required_skills: Option<String>,
    pub budget: Option<BigDecimal>,
    pub payment_type: Option<PaymentType>,
    pub number_of_freelancers: Option<u32>,
    pub status: Option<ProjectStatus>,
    pub attached_document_path: Option<String>,
}
