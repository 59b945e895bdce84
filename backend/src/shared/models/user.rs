use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    user_edit_request::UserEditRequest, user_get_response::UserGetResponse,
    user_register_request::UserRegisterRequest, user_role::UserRole, user_summary::UserSummary,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
    pub password_hash: String,
    pub role: UserRole,
    pub gender: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds an unsaved user; the id is assigned on insert.
    pub fn new(request: UserRegisterRequest, password_hash: String) -> Self {
        Self {
            id: 0,
            first_name: request.first_name,
            last_name: request.last_name,
            email: User::normalize_email(&request.email),
            phone_no: request.phone_no,
            password_hash,
            role: request.role,
            gender: request.gender,
            profile_picture: request.profile_picture,
            created_at: Utc::now(),
        }
    }

    pub fn edit(self, request: UserEditRequest) -> Self {
        Self {
            first_name: request.first_name.unwrap_or(self.first_name),
            last_name: request.last_name.unwrap_or(self.last_name),
            phone_no: request.phone_no.unwrap_or(self.phone_no),
            gender: request.gender.or(self.gender),
            profile_picture: request.profile_picture.or(self.profile_picture),
            ..self
        }
    }

    pub fn to_get_dto(&self) -> UserGetResponse {
        UserGetResponse {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_no: self.phone_no.clone(),
            role: self.role,
            gender: self.gender.clone(),
            profile_picture: self.profile_picture.clone(),
            created_at: self.created_at,
        }
    }

    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> UserRegisterRequest {
        UserRegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "  Ada@Example.COM ".into(),
            phone_no: "555-0100".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            role: UserRole::Client,
            gender: None,
            profile_picture: None,
        }
    }

    #[test]
    fn new_user_normalizes_email() {
        let user = User::new(register_request(), "hash".into());
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn edit_only_touches_present_fields() {
        let user = User::new(register_request(), "hash".into());
        let edited = user.clone().edit(UserEditRequest {
            first_name: None,
            last_name: Some("Byron".into()),
            phone_no: None,
            gender: Some("Female".into()),
            profile_picture: None,
        });

        assert_eq!(edited.first_name, "Ada");
        assert_eq!(edited.last_name, "Byron");
        assert_eq!(edited.phone_no, "555-0100");
        assert_eq!(edited.gender.as_deref(), Some("Female"));
        assert_eq!(edited.email, user.email);
        assert_eq!(edited.password_hash, user.password_hash);
    }
}
