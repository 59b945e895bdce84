use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role,
    freelancer_profile::FreelancerProfile, freelancer_profile_add_request::FreelancerProfileAddRequest,
    freelancer_profile_edit_request::FreelancerProfileEditRequest, json_body::JsonBody, user::User,
    user_role::UserRole,
};

pub struct FreelancerProfileController {}

impl FreelancerProfileController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<FreelancerProfileAddRequest>,
    ) -> Result<(StatusCode, Json<FreelancerProfile>), ApiError> {
        require_role(&caller, UserRole::Freelancer)?;
        let uow = state.data_context.begin()?;
        if uow.freelancer_profiles().get(caller.id)?.is_some() {
            return Err(ApiError::Conflict(format!("User {} already has a profile", caller.id)));
        }
        let profile = FreelancerProfile::new(body, caller.id);
        uow.freelancer_profiles().add(&profile)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(profile)))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<FreelancerProfile>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.freelancer_profiles().get_all()?))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<FreelancerProfile>, ApiError> {
        let uow = state.data_context.read()?;
        let profile = uow
            .freelancer_profiles()
            .get(id)?
            .ok_or_else(|| ApiError::not_found("Freelancer profile", id))?;
        Ok(Json(profile))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<FreelancerProfileEditRequest>,
    ) -> Result<Json<FreelancerProfile>, ApiError> {
        if caller.id != id {
            require_role(&caller, UserRole::Admin)?;
        }
        let uow = state.data_context.begin()?;
        let mut profile = uow
            .freelancer_profiles()
            .get(id)?
            .ok_or_else(|| ApiError::not_found("Freelancer profile", id))?;
        profile.apply(body);
        uow.freelancer_profiles().update(&profile)?;
        uow.save()?;
        Ok(Json(profile))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        if caller.id != id {
            require_role(&caller, UserRole::Admin)?;
        }
        let uow = state.data_context.begin()?;
        if !uow.freelancer_profiles().delete(id)? {
            return Err(ApiError::not_found("Freelancer profile", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
