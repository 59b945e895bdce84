use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role, json_body::JsonBody,
    user::User, user_edit_request::UserEditRequest, user_get_response::UserGetResponse, user_role::UserRole,
};

pub struct UserController {}

impl UserController {
    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<UserGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        let users = uow.users().get_all()?;
        Ok(Json(users.iter().map(User::to_get_dto).collect()))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<UserGetResponse>, ApiError> {
        let uow = state.data_context.read()?;
        let user = uow.users().get(id)?.ok_or_else(|| ApiError::not_found("User", id))?;
        Ok(Json(user.to_get_dto()))
    }

    /// Users edit themselves; Admin edits anyone.
    pub async fn edit(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<UserEditRequest>,
    ) -> Result<Json<UserGetResponse>, ApiError> {
        if caller.id != id {
            require_role(&caller, UserRole::Admin)?;
        }
        let uow = state.data_context.begin()?;
        let user = uow.users().get(id)?.ok_or_else(|| ApiError::not_found("User", id))?;
        let edited = user.edit(body);
        uow.users().update(&edited)?;
        uow.save()?;
        Ok(Json(edited.to_get_dto()))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        require_role(&caller, UserRole::Admin)?;
        let uow = state.data_context.begin()?;
        if !uow.users().delete(id)? {
            return Err(ApiError::not_found("User", id));
        }
        uow.freelancer_profiles().delete(id)?;
        uow.save()?;
        info!("{} deleted user {}", caller.email, id);
        Ok(StatusCode::NO_CONTENT)
    }
}
