use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feedback_add_request::FeedbackAddRequest;

/// A client's review of a freelancer on a project. `rating` is free text
/// ("Excellent", "Good", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: u64,
    pub client_id: u64,
    pub project_id: u64,
    pub freelancer_id: u64,
    pub review: String,
    pub rating: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(request: FeedbackAddRequest, client_id: u64) -> Self {
        Self {
            id: 0,
            client_id,
            project_id: request.project_id,
            freelancer_id: request.freelancer_id,
            review: request.review,
            rating: request.rating,
            created_at: Utc::now(),
        }
    }
}
