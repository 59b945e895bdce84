use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user_role::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGetResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
    pub role: UserRole,
    pub gender: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}
