use serde::{Deserialize, Serialize};

/// Email, role and password are not editable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEditRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_no: Option<String>,
    pub gender: Option<String>,
    pub profile_picture: Option<String>,
}
