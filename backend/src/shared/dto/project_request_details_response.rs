use serde::{Deserialize, Serialize};

use crate::{project_get_response::ProjectGetResponse, project_request::ProjectRequest, user_summary::UserSummary};

/// A freelancer's request joined with the project and its client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestDetailsResponse {
    #[serde(flatten)]
    pub request: ProjectRequest,
    pub project: Option<ProjectGetResponse>,
    pub client: Option<UserSummary>,
}
