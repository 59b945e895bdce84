use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role, json_body::JsonBody,
    milestone::Milestone, milestone_add_request::MilestoneAddRequest,
    milestone_edit_request::MilestoneEditRequest, milestone_status::MilestoneStatus,
    milestone_submit_request::MilestoneSubmitRequest, user::User, user_role::UserRole,
};

pub struct MilestoneController {}

/// Filter queries answer 404 instead of an empty list.
fn non_empty(milestones: Vec<Milestone>, what: &str) -> Result<Json<Vec<Milestone>>, ApiError> {
    if milestones.is_empty() {
        Err(ApiError::NotFound(format!("No {what} milestones found")))
    } else {
        Ok(Json(milestones))
    }
}

fn ensure_not_approved(milestone: &Milestone) -> Result<(), ApiError> {
    if milestone.is_approved {
        Err(ApiError::Forbidden(format!("Milestone {} is already approved", milestone.id)))
    } else {
        Ok(())
    }
}

impl MilestoneController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<MilestoneAddRequest>,
    ) -> Result<(StatusCode, Json<Milestone>), ApiError> {
        require_role(&caller, UserRole::Client)?;
        if body.title.trim().is_empty() {
            return Err(ApiError::BadRequest("title is required".to_string()));
        }
        let uow = state.data_context.begin()?;
        if uow.projects().get(body.project_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Project {} does not exist", body.project_id)));
        }
        let mut milestone = Milestone::new(body);
        uow.milestones().add(&mut milestone)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(milestone)))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<Milestone>, ApiError> {
        let uow = state.data_context.read()?;
        let milestone = uow.milestones().get(id)?.ok_or_else(|| ApiError::not_found("Milestone", id))?;
        Ok(Json(milestone))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Milestone>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.milestones().get_all()?))
    }

    pub async fn get_by_project(
        State(state): State<SharedState>,
        Path(project_id): Path<u64>,
    ) -> Result<Json<Vec<Milestone>>, ApiError> {
        let uow = state.data_context.read()?;
        non_empty(uow.milestones().get_by_project(project_id)?, &format!("project {project_id}"))
    }

    pub async fn get_pending(State(state): State<SharedState>) -> Result<Json<Vec<Milestone>>, ApiError> {
        let uow = state.data_context.read()?;
        non_empty(uow.milestones().get_by_status(MilestoneStatus::Pending)?, "pending")
    }

    pub async fn get_submitted(State(state): State<SharedState>) -> Result<Json<Vec<Milestone>>, ApiError> {
        let uow = state.data_context.read()?;
        non_empty(uow.milestones().get_by_status(MilestoneStatus::Submitted)?, "submitted")
    }

    pub async fn get_under_review(State(state): State<SharedState>) -> Result<Json<Vec<Milestone>>, ApiError> {
        let uow = state.data_context.read()?;
        non_empty(uow.milestones().get_by_status(MilestoneStatus::UnderReview)?, "under review")
    }

    pub async fn submit(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<MilestoneSubmitRequest>,
    ) -> Result<Json<Milestone>, ApiError> {
        require_role(&caller, UserRole::Freelancer)?;
        let uow = state.data_context.begin()?;
        let mut milestone = uow.milestones().get(id)?.ok_or_else(|| ApiError::not_found("Milestone", id))?;
        ensure_not_approved(&milestone)?;
        milestone.submit(body);
        uow.milestones().update(&milestone)?;
        uow.save()?;
        info!("Milestone {} submitted by {}", id, caller.email);
        Ok(Json(milestone))
    }

    pub async fn approve(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
    ) -> Result<Json<Milestone>, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        let mut milestone = uow.milestones().get(id)?.ok_or_else(|| ApiError::not_found("Milestone", id))?;
        ensure_not_approved(&milestone)?;
        milestone.is_approved = true;
        uow.milestones().update(&milestone)?;
        uow.save()?;
        info!("Milestone {} approved by {}", id, caller.email);
        Ok(Json(milestone))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<MilestoneEditRequest>,
    ) -> Result<Json<Milestone>, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        let mut milestone = uow.milestones().get(id)?.ok_or_else(|| ApiError::not_found("Milestone", id))?;
        ensure_not_approved(&milestone)?;
        milestone.replace(body);
        uow.milestones().update(&milestone)?;
        uow.save()?;
        Ok(Json(milestone))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        let milestone = uow.milestones().get(id)?.ok_or_else(|| ApiError::not_found("Milestone", id))?;
        ensure_not_approved(&milestone)?;
        uow.milestones().delete(id)?;
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
