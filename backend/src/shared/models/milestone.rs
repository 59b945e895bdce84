use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    milestone_add_request::MilestoneAddRequest, milestone_edit_request::MilestoneEditRequest,
    milestone_status::MilestoneStatus, milestone_submit_request::MilestoneSubmitRequest,
};

/// A payable checkpoint of a project.
///
/// `is_approved` is terminal: handlers refuse to touch an approved milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub status: MilestoneStatus,
    pub submission_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_file_urls: Vec<String>,
    pub freelancer_comments: Option<String>,
    pub is_approved: bool,
    pub project_id: u64,
}

impl Milestone {
    pub fn new(request: MilestoneAddRequest) -> Self {
        Self {
            id: 0,
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            amount: request.amount,
            status: MilestoneStatus::Pending,
            submission_date: None,
            submitted_file_urls: Vec::new(),
            freelancer_comments: None,
            is_approved: false,
            project_id: request.project_id,
        }
    }

    pub fn submit(&mut self, request: MilestoneSubmitRequest) {
        self.submission_date = Some(request.submission_date.unwrap_or_else(Utc::now));
        self.submitted_file_urls = request.submitted_file_urls;
        self.freelancer_comments = request.freelancer_comments;
        self.status = MilestoneStatus::Submitted;
    }

    /// Replaces every editable field; the project link and approval flag stay.
    pub fn replace(&mut self, request: MilestoneEditRequest) {
        self.title = request.title;
        self.description = request.description;
        self.due_date = request.due_date;
        self.amount = request.amount;
        self.freelancer_comments = request.freelancer_comments;
        self.submitted_file_urls = request.submitted_file_urls;
        self.submission_date = request.submission_date;
        self.status = request.status;
    }
}
