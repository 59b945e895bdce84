use axum::{extract::{Path, State}, http::StatusCode, Json};

use crate::{
    api_error::ApiError, app_state::SharedState, json_body::JsonBody, subtask::Subtask,
    subtask_add_request::SubtaskAddRequest, subtask_edit_request::SubtaskEditRequest,
};

pub struct SubtaskController {}

impl SubtaskController {
    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Subtask>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.subtasks().get_all()?))
    }

    pub async fn get_by_task(
        State(state): State<SharedState>,
        Path(task_id): Path<u64>,
    ) -> Result<Json<Vec<Subtask>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.subtasks().get_by_task(task_id)?))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<Subtask>, ApiError> {
        let uow = state.data_context.read()?;
        let subtask = uow.subtasks().get(id)?.ok_or_else(|| ApiError::not_found("Subtask", id))?;
        Ok(Json(subtask))
    }

    pub async fn add(
        State(state): State<SharedState>,
        JsonBody(body): JsonBody<SubtaskAddRequest>,
    ) -> Result<(StatusCode, Json<Subtask>), ApiError> {
        if body.title.trim().is_empty() {
            return Err(ApiError::BadRequest("title is required".to_string()));
        }
        let uow = state.data_context.begin()?;
        if uow.tasks().get(body.task_item_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Task {} does not exist", body.task_item_id)));
        }
        let mut subtask = Subtask::new(body);
        uow.subtasks().add(&mut subtask)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(subtask)))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<SubtaskEditRequest>,
    ) -> Result<Json<Subtask>, ApiError> {
        let uow = state.data_context.begin()?;
        let mut subtask = uow.subtasks().get(id)?.ok_or_else(|| ApiError::not_found("Subtask", id))?;
        subtask.apply(body);
        uow.subtasks().update(&subtask)?;
        uow.save()?;
        Ok(Json(subtask))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.subtasks().delete(id)? {
            return Err(ApiError::not_found("Subtask", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
