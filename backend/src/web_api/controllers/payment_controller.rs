use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};
use tracing::info;

use crate::{
    api_error::ApiError, app_state::SharedState, authentication::auth::require_role,
    data_access::unit_of_work::UnitOfWork, json_body::JsonBody,
    payment::Payment, payment_add_request::PaymentAddRequest, user::User, user_role::UserRole,
};

pub struct PaymentController {}

impl PaymentController {
    pub async fn add(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<PaymentAddRequest>,
    ) -> Result<(StatusCode, Json<Payment>), ApiError> {
        require_role(&caller, UserRole::Client)?;
        let uow = state.data_context.begin()?;
        Self::check_references(&uow, &body)?;
        let mut payment = Payment::new(body, caller.id);
        uow.payments().add(&mut payment)?;
        uow.save()?;
        info!("Payment {} of {} recorded for project {}", payment.id, payment.amount, payment.project_id);
        Ok((StatusCode::CREATED, Json(payment)))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Payment>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.payments().get_all()?))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<Payment>, ApiError> {
        let uow = state.data_context.read()?;
        let payment = uow.payments().get(id)?.ok_or_else(|| ApiError::not_found("Payment", id))?;
        Ok(Json(payment))
    }

    pub async fn get_by_project(
        State(state): State<SharedState>,
        Path(project_id): Path<u64>,
    ) -> Result<Json<Vec<Payment>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.payments().get_by_project(project_id)?))
    }

    pub async fn get_by_freelancer(
        State(state): State<SharedState>,
        Path(freelancer_id): Path<u64>,
    ) -> Result<Json<Vec<Payment>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.payments().get_by_freelancer(freelancer_id)?))
    }

    pub async fn get_by_client(
        State(state): State<SharedState>,
        Path(client_id): Path<u64>,
    ) -> Result<Json<Vec<Payment>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.payments().get_by_client(client_id)?))
    }

    /// Every id the payment points at must name a stored record.
    fn check_references(uow: &UnitOfWork, body: &PaymentAddRequest) -> Result<(), ApiError> {
        let missing = |what: &str, id: u64| ApiError::BadRequest(format!("{what} {id} does not exist"));
        if uow.projects().get(body.project_id)?.is_none() {
            return Err(missing("Project", body.project_id));
        }
        if uow.users().get(body.freelancer_id)?.is_none() {
            return Err(missing("Freelancer", body.freelancer_id));
        }
        if let Some(client_id) = body.client_id {
            if uow.users().get(client_id)?.is_none() {
                return Err(missing("Client", client_id));
            }
        }
        if let Some(milestone_id) = body.milestone_id {
            if uow.milestones().get(milestone_id)?.is_none() {
                return Err(missing("Milestone", milestone_id));
            }
        }
        if let Some(timesheet_id) = body.timesheet_id {
            if uow.timesheets().get(timesheet_id)?.is_none() {
                return Err(missing("Timesheet", timesheet_id));
            }
        }
        Ok(())
    }
}
