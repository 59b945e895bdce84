use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    payment_type::PaymentType, project_add_request::ProjectAddRequest,
    project_edit_request::ProjectEditRequest, project_get_response::ProjectGetResponse,
    project_status::ProjectStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline: NaiveDate,
    pub required_skills: String,
    pub budget: BigDecimal,
    pub payment_type: Option<PaymentType>,
    pub number_of_freelancers: u32,
    pub status: ProjectStatus,
    pub attached_document_path: Option<String>,
    pub client_id: u64,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(request: ProjectAddRequest, client_id: u64) -> Self {
        Self {
            id: 0,
            title: request.title,
            description: request.description,
            category: request.category,
            deadline: request.deadline,
            required_skills: request.required_skills,
            budget: request.budget,
            payment_type: request.payment_type,
            number_of_freelancers: request.number_of_freelancers.unwrap_or(1),
            status: ProjectStatus::Open,
            attached_document_path: request.attached_document_path,
            client_id,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, request: ProjectEditRequest) {
        if let Some(title) = request.title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        if let Some(description) = request.description.filter(|d| !d.trim().is_empty()) {
            self.description = description;
        }
        if let Some(category) = request.category.filter(|c| !c.trim().is_empty()) {
            self.category = category;
        }
        if let Some(skills) = request.required_skills.filter(|s| !s.trim().is_empty()) {
            self.required_skills = skills;
        }
        if let Some(deadline) = request.deadline {
            self.deadline = deadline;
        }
        if let Some(budget) = request.budget {
            self.budget = budget;
        }
        if let Some(payment_type) = request.payment_type {
            self.payment_type = Some(payment_type);
        }
        if let Some(count) = request.number_of_freelancers {
            self.number_of_freelancers = count;
        }
        if let Some(status) = request.status {
            self.status = status;
        }
        if let Some(path) = request.attached_document_path {
            self.attached_document_path = Some(path);
        }
    }

    /// Whole days from `today` until the deadline; negative once it has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    pub fn to_get_dto(&self) -> ProjectGetResponse {
        ProjectGetResponse {
            days_remaining: self.days_remaining(Utc::now().date_naive()),
            project: self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new(
            ProjectAddRequest {
                title: "Storefront".into(),
                description: "Online shop".into(),
                category: "Web".into(),
                deadline: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
                required_skills: "rust, react".into(),
                budget: BigDecimal::from(3000),
                payment_type: Some(PaymentType::Milestone),
                number_of_freelancers: None,
                attached_document_path: None,
            },
            9,
        )
    }

    #[test]
    fn new_project_is_open_and_owned_by_client() {
        let p = project();
        assert_eq!(p.status, ProjectStatus::Open);
        assert_eq!(p.client_id, 9);
        assert_eq!(p.number_of_freelancers, 1);
    }

    #[test]
    fn days_remaining_counts_to_deadline() {
        let p = project();
        assert_eq!(p.days_remaining(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), 30);
        assert_eq!(p.days_remaining(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()), -2);
    }

    #[test]
    fn apply_skips_blank_strings() {
        let mut p = project();
        p.apply(ProjectEditRequest {
            title: Some("  ".into()),
            category: Some("Mobile".into()),
            ..Default::default()
        });
        assert_eq!(p.title, "Storefront");
        assert_eq!(p.category, "Mobile");
    }
}
