use axum::{extract::State, http::StatusCode, Json};
use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth, json_body::JsonBody,
    login_request::LoginRequest, login_response::LoginResponse, user_get_response::UserGetResponse,
    user_register_request::UserRegisterRequest,
};

pub struct AuthenticationController {}

impl AuthenticationController {
    pub async fn register(
        State(state): State<SharedState>,
        body: JsonBody<UserRegisterRequest>,
    ) -> Result<(StatusCode, Json<UserGetResponse>), ApiError> {
        auth::register(State(state), body)
    }

    pub async fn login(
        State(state): State<SharedState>,
        body: JsonBody<LoginRequest>,
    ) -> Result<Json<LoginResponse>, ApiError> {
        auth::login(State(state), body)
    }
}
