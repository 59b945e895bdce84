use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use chrono::Utc;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role, json_body::JsonBody,
    log_add_request::LogAddRequest, log_get_response::LogGetResponse, log_stop_request::LogStopRequest,
    user::User, user_role::UserRole, work_log::WorkLog,
};

pub struct LogController {}

impl LogController {
    /// Starts a running log for the calling freelancer.
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<LogAddRequest>,
    ) -> Result<(StatusCode, Json<LogGetResponse>), ApiError> {
        require_role(&caller, UserRole::Freelancer)?;
        let uow = state.data_context.begin()?;
        if uow.tasks().get(body.task_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Task {} does not exist", body.task_id)));
        }
        if uow.freelancer_profiles().get(caller.id)?.is_none() {
            return Err(ApiError::BadRequest(format!("User {} has no freelancer profile", caller.id)));
        }
        let mut log = WorkLog::start(caller.id, body.task_id, body.start_time.unwrap_or_else(Utc::now));
        uow.logs().add(&mut log)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(log.into())))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<LogGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.logs().get_all()?.into_iter().map(LogGetResponse::from).collect()))
    }

    pub async fn get_by_task(
        State(state): State<SharedState>,
        Path(task_id): Path<u64>,
    ) -> Result<Json<Vec<LogGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.logs().get_by_task(task_id)?.into_iter().map(LogGetResponse::from).collect()))
    }

    pub async fn get_first_for_task(
        State(state): State<SharedState>,
        Path(task_id): Path<u64>,
    ) -> Result<Json<LogGetResponse>, ApiError> {
        let uow = state.data_context.read()?;
        let log = uow
            .logs()
            .first_for_task(task_id)?
            .ok_or_else(|| ApiError::NotFound(format!("No logs for task {task_id}")))?;
        Ok(Json(log.into()))
    }

    pub async fn stop(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
        body: Option<JsonBody<LogStopRequest>>,
    ) -> Result<Json<LogGetResponse>, ApiError> {
        let end_time = body.and_then(|JsonBody(b)| b.end_time).unwrap_or_else(Utc::now);
        let uow = state.data_context.begin()?;
        let mut log = uow.logs().get(id)?.ok_or_else(|| ApiError::not_found("Log", id))?;
        if end_time < log.start_time {
            return Err(ApiError::BadRequest("endTime must not precede startTime".to_string()));
        }
        log.stop(end_time);
        uow.logs().update(&log)?;
        uow.save()?;
        Ok(Json(log.into()))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.logs().delete(id)? {
            return Err(ApiError::not_found("Log", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
