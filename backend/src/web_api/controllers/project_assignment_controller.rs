use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role, json_body::JsonBody,
    project_assignment::ProjectAssignment, project_assignment_add_request::ProjectAssignmentAddRequest,
    user::User, user_get_response::UserGetResponse, user_role::UserRole,
};

pub struct ProjectAssignmentController {}

impl ProjectAssignmentController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<ProjectAssignmentAddRequest>,
    ) -> Result<(StatusCode, Json<ProjectAssignment>), ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        if uow.projects().get(body.project_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Project {} does not exist", body.project_id)));
        }
        if uow.users().get(body.freelancer_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("User {} does not exist", body.freelancer_id)));
        }
        if let Some(existing) = uow.assignments().find_pair(body.project_id, body.freelancer_id)? {
            return Ok((StatusCode::OK, Json(existing)));
        }

        let mut assignment = ProjectAssignment::new(body.project_id, body.freelancer_id);
        uow.assignments().add(&mut assignment)?;
        uow.save()?;
        info!("Assigned freelancer {} to project {}", assignment.freelancer_id, assignment.project_id);
        Ok((StatusCode::CREATED, Json(assignment)))
    }

    pub async fn get_freelancers(
        State(state): State<SharedState>,
        Path(project_id): Path<u64>,
    ) -> Result<Json<Vec<UserGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        let mut freelancers = Vec::new();
        for assignment in uow.assignments().get_by_project(project_id)? {
            if let Some(user) = uow.users().get(assignment.freelancer_id)? {
                freelancers.push(user.to_get_dto());
            }
        }
        Ok(Json(freelancers))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path((project_id, freelancer_id)): Path<(u64, u64)>,
    ) -> Result<StatusCode, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        let assignment = uow.assignments().find_pair(project_id, freelancer_id)?.ok_or_else(|| {
            ApiError::NotFound(format!("Freelancer {freelancer_id} is not assigned to project {project_id}"))
        })?;
        uow.assignments().delete(assignment.id)?;
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
