use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, json_body::JsonBody, task_add_request::TaskAddRequest,
    task_edit_request::TaskEditRequest, task_get_response::TaskGetResponse, task_item::TaskItem, user::User,
};

pub struct TaskController {}

impl TaskController {
    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<TaskGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.tasks().get_all_with_details()?))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<TaskGetResponse>, ApiError> {
        let uow = state.data_context.read()?;
        let task = uow.tasks().get_with_details(id)?.ok_or_else(|| ApiError::not_found("Task", id))?;
        Ok(Json(task))
    }

    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<TaskAddRequest>,
    ) -> Result<(StatusCode, Json<TaskItem>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::BadRequest("title is required".to_string()));
        }
        let uow = state.data_context.begin()?;
        let mut task = TaskItem::new(body, caller.id);
        for user_id in [task.created_by_user_id, task.assigned_to_user_id] {
            if uow.users().get(user_id)?.is_none() {
                return Err(ApiError::BadRequest(format!("User {user_id} does not exist")));
            }
        }
        uow.tasks().add(&mut task)?;
        uow.save()?;
        info!("Task {} created by {}", task.id, caller.email);
        Ok((StatusCode::CREATED, Json(task)))
    }

    /// Last write wins; there is no version check.
    pub async fn edit(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<TaskEditRequest>,
    ) -> Result<Json<TaskItem>, ApiError> {
        let uow = state.data_context.begin()?;
        let mut task = uow.tasks().get(id)?.ok_or_else(|| ApiError::not_found("Task", id))?;
        if let Some(assignee) = body.assigned_to_user_id {
            if uow.users().get(assignee)?.is_none() {
                return Err(ApiError::BadRequest(format!("User {assignee} does not exist")));
            }
        }
        task.apply(body);
        uow.tasks().update(&task)?;
        uow.save()?;
        Ok(Json(task))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.tasks().delete(id)? {
            return Err(ApiError::not_found("Task", id));
        }
        uow.save()?;
        info!("Task {} deleted with its logs and subtasks", id);
        Ok(StatusCode::NO_CONTENT)
    }
}
