use serde::{Deserialize, Serialize};

use crate::user_role::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
    pub gender: Option<String>,
    pub profile_picture: Option<String>,
}
