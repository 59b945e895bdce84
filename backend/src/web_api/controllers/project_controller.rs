use axum::{extract::{Path, Query, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role,
    deadline_range_query::DeadlineRangeQuery, json_body::JsonBody, project::Project,
    project_add_request::ProjectAddRequest, project_edit_request::ProjectEditRequest,
    project_get_response::ProjectGetResponse, user::User, user_role::UserRole,
};

pub struct ProjectController {}

impl ProjectController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<ProjectAddRequest>,
    ) -> Result<(StatusCode, Json<ProjectGetResponse>), ApiError> {
        require_role(&caller, UserRole::Client)?;
        if body.title.trim().is_empty() {
            return Err(ApiError::BadRequest("title is required".to_string()));
        }
        let uow = state.data_context.begin()?;
        let mut project = Project::new(body, caller.id);
        uow.projects().add(&mut project)?;
        uow.save()?;
        info!("{} posted project {} ({})", caller.email, project.id, project.title);
        Ok((StatusCode::CREATED, Json(project.to_get_dto())))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<ProjectGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.projects().get_all()?.iter().map(Project::to_get_dto).collect()))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<ProjectGetResponse>, ApiError> {
        let uow = state.data_context.read()?;
        let project = uow.projects().get(id)?.ok_or_else(|| ApiError::not_found("Project", id))?;
        Ok(Json(project.to_get_dto()))
    }

    pub async fn get_by_category(
        State(state): State<SharedState>,
        Path(category): Path<String>,
    ) -> Result<Json<Vec<ProjectGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        let projects = uow.projects().get_by_category(&category)?;
        Ok(Json(projects.iter().map(Project::to_get_dto).collect()))
    }

    pub async fn get_by_deadline(
        State(state): State<SharedState>,
        Query(range): Query<DeadlineRangeQuery>,
    ) -> Result<Json<Vec<ProjectGetResponse>>, ApiError> {
        if range.end < range.start {
            return Err(ApiError::BadRequest("end must not precede start".to_string()));
        }
        let uow = state.data_context.read()?;
        let projects = uow.projects().get_by_deadline_range(range.start, range.end)?;
        Ok(Json(projects.iter().map(Project::to_get_dto).collect()))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<ProjectEditRequest>,
    ) -> Result<Json<ProjectGetResponse>, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        let mut project = uow.projects().get(id)?.ok_or_else(|| ApiError::not_found("Project", id))?;
        project.apply(body);
        uow.projects().update(&project)?;
        uow.save()?;
        Ok(Json(project.to_get_dto()))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        if !uow.projects().delete(id)? {
            return Err(ApiError::not_found("Project", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
