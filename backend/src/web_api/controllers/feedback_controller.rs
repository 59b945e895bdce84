use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role, feedback::Feedback,
    feedback_add_request::FeedbackAddRequest, json_body::JsonBody, user::User, user_role::UserRole,
};

pub struct FeedbackController {}

impl FeedbackController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<FeedbackAddRequest>,
    ) -> Result<(StatusCode, Json<Feedback>), ApiError> {
        require_role(&caller, UserRole::Client)?;
        if body.review.trim().is_empty() || body.rating.trim().is_empty() {
            return Err(ApiError::BadRequest("review and rating are required".to_string()));
        }
        let uow = state.data_context.begin()?;
        if uow.projects().get(body.project_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Project {} does not exist", body.project_id)));
        }
        let mut feedback = Feedback::new(body, caller.id);
        uow.feedbacks().add(&mut feedback)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(feedback)))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Feedback>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.feedbacks().get_all()?))
    }

    pub async fn get_by_project(
        State(state): State<SharedState>,
        Path(project_id): Path<u64>,
    ) -> Result<Json<Vec<Feedback>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.feedbacks().get_by_project(project_id)?))
    }

    pub async fn get_by_freelancer(
        State(state): State<SharedState>,
        Path(freelancer_id): Path<u64>,
    ) -> Result<Json<Vec<Feedback>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.feedbacks().get_by_freelancer(freelancer_id)?))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.feedbacks().delete(id)? {
            return Err(ApiError::not_found("Feedback", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
