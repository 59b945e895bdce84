use serde::{Deserialize, Serialize};

use crate::project::Project;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGetResponse {
    #[serde(flatten)]
    pub project: Project,
    pub days_remaining: i64,
}
