use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role, json_body::JsonBody,
    project_request::ProjectRequest, project_request_add_request::ProjectRequestAddRequest,
    project_request_details_response::ProjectRequestDetailsResponse,
    project_request_status_request::ProjectRequestStatusRequest, user::User, user_role::UserRole,
};

pub struct ProjectRequestController {}

impl ProjectRequestController {
    /// Returns the existing request with 200 when the caller already asked.
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<ProjectRequestAddRequest>,
    ) -> Result<(StatusCode, Json<ProjectRequest>), ApiError> {
        require_role(&caller, UserRole::Freelancer)?;
        let uow = state.data_context.begin()?;
        if uow.projects().get(body.project_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Project {} does not exist", body.project_id)));
        }
        if let Some(existing) = uow.project_requests().find_pair(body.project_id, caller.id)? {
            return Ok((StatusCode::OK, Json(existing)));
        }

        let mut request = ProjectRequest::new(body.project_id, caller.id);
        uow.project_requests().add(&mut request)?;
        uow.save()?;
        info!("{} requested to join project {}", caller.email, request.project_id);
        Ok((StatusCode::CREATED, Json(request)))
    }

    pub async fn get_by_freelancer(
        State(state): State<SharedState>,
        Path(freelancer_id): Path<u64>,
    ) -> Result<Json<Vec<ProjectRequestDetailsResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        let mut details = Vec::new();
        for request in uow.project_requests().get_by_freelancer(freelancer_id)? {
            let project = uow.projects().get(request.project_id)?;
            let client = match &project {
                Some(p) => uow.users().get(p.client_id)?.map(|u| u.to_summary()),
                None => None,
            };
            details.push(ProjectRequestDetailsResponse {
                request,
                project: project.map(|p| p.to_get_dto()),
                client,
            });
        }
        Ok(Json(details))
    }

    pub async fn get_by_project(
        State(state): State<SharedState>,
        Path(project_id): Path<u64>,
    ) -> Result<Json<Vec<ProjectRequest>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.project_requests().get_by_project(project_id)?))
    }

    pub async fn update_status(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<ProjectRequestStatusRequest>,
    ) -> Result<Json<ProjectRequest>, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        let mut request = uow
            .project_requests()
            .get(id)?
            .ok_or_else(|| ApiError::not_found("Project request", id))?;
        request.status = body.status;
        uow.project_requests().update(&request)?;
        uow.save()?;
        info!("Project request {} is now {:?}", id, request.status);
        Ok(Json(request))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.project_requests().delete(id)? {
            return Err(ApiError::not_found("Project request", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
