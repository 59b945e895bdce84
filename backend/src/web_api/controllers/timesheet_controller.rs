use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use chrono::NaiveDate;
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, approval_status::ApprovalStatus,
    authentication::auth::require_role, json_body::JsonBody, timesheet::Timesheet,
    timesheet_add_request::TimesheetAddRequest, timesheet_edit_request::TimesheetEditRequest,
    timesheet_get_response::TimesheetGetResponse, timesheet_review_request::TimesheetReviewRequest,
    user::User, user_role::UserRole,
};

pub struct TimesheetController {}

fn ensure_ordered(timesheet: &Timesheet) -> Result<(), ApiError> {
    if !timesheet.is_ordered() {
        Err(ApiError::BadRequest("endTime must not precede startTime".to_string()))
    } else {
        Ok(())
    }
}

fn responses(timesheets: Vec<Timesheet>) -> Json<Vec<TimesheetGetResponse>> {
    Json(timesheets.into_iter().map(TimesheetGetResponse::from).collect())
}

impl TimesheetController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<TimesheetAddRequest>,
    ) -> Result<(StatusCode, Json<TimesheetGetResponse>), ApiError> {
        require_role(&caller, UserRole::Freelancer)?;
        let mut timesheet = Timesheet::new(body);
        ensure_ordered(&timesheet)?;

        let uow = state.data_context.begin()?;
        uow.timesheets().add(&mut timesheet)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(timesheet.into())))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<TimesheetGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(responses(uow.timesheets().get_all()?))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<TimesheetGetResponse>, ApiError> {
        let uow = state.data_context.read()?;
        let timesheet = uow.timesheets().get(id)?.ok_or_else(|| ApiError::not_found("Timesheet", id))?;
        Ok(Json(timesheet.into()))
    }

    pub async fn get_by_freelancer(
        State(state): State<SharedState>,
        Path(name): Path<String>,
    ) -> Result<Json<Vec<TimesheetGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(responses(uow.timesheets().get_by_freelancer_name(&name)?))
    }

    pub async fn get_by_project(
        State(state): State<SharedState>,
        Path(name): Path<String>,
    ) -> Result<Json<Vec<TimesheetGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(responses(uow.timesheets().get_by_project_name(&name)?))
    }

    pub async fn get_by_date(
        State(state): State<SharedState>,
        Path(date): Path<NaiveDate>,
    ) -> Result<Json<Vec<TimesheetGetResponse>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(responses(uow.timesheets().get_by_date(date)?))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<TimesheetEditRequest>,
    ) -> Result<Json<TimesheetGetResponse>, ApiError> {
        let uow = state.data_context.begin()?;
        let mut timesheet = uow.timesheets().get(id)?.ok_or_else(|| ApiError::not_found("Timesheet", id))?;
        timesheet.apply(body);
        ensure_ordered(&timesheet)?;

        uow.timesheets().update(&timesheet)?;
        uow.save()?;
        Ok(Json(timesheet.into()))
    }

    pub async fn approve(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        body: Option<JsonBody<TimesheetReviewRequest>>,
    ) -> Result<Json<TimesheetGetResponse>, ApiError> {
        Self::review(state, caller, id, ApprovalStatus::Approved, body)
    }

    pub async fn reject(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        Path(id): Path<u64>,
        body: Option<JsonBody<TimesheetReviewRequest>>,
    ) -> Result<Json<TimesheetGetResponse>, ApiError> {
        Self::review(state, caller, id, ApprovalStatus::Rejected, body)
    }

    fn review(
        state: SharedState,
        caller: User,
        id: u64,
        status: ApprovalStatus,
        body: Option<JsonBody<TimesheetReviewRequest>>,
    ) -> Result<Json<TimesheetGetResponse>, ApiError> {
        require_role(&caller, UserRole::Client)?;
        let comments = body.and_then(|JsonBody(b)| b.reviewer_comments);
        let uow = state.data_context.begin()?;
        let mut timesheet = uow.timesheets().get(id)?.ok_or_else(|| ApiError::not_found("Timesheet", id))?;
        timesheet.review(status, comments);
        uow.timesheets().update(&timesheet)?;
        uow.save()?;
        info!("Timesheet {} {:?} by {}", id, status, caller.email);
        Ok(Json(timesheet.into()))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.timesheets().delete(id)? {
            return Err(ApiError::not_found("Timesheet", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
