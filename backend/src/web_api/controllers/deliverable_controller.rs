use axum::{extract::{Path, State}, http::StatusCode, Json};

use crate::{
    api_error::ApiError, app_state::SharedState, deliverable::Deliverable,
    deliverable_add_request::DeliverableAddRequest, deliverable_edit_request::DeliverableEditRequest,
    json_body::JsonBody,
};

pub struct DeliverableController {}

impl DeliverableController {
    pub async fn add(
        State(state): State<SharedState>,
        JsonBody(body): JsonBody<DeliverableAddRequest>,
    ) -> Result<(StatusCode, Json<Deliverable>), ApiError> {
        let uow = state.data_context.begin()?;
        if uow.projects().get(body.project_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("Project {} does not exist", body.project_id)));
        }
        let mut deliverable = Deliverable::new(body);
        uow.deliverables().add(&mut deliverable)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(deliverable)))
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Deliverable>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.deliverables().get_all()?))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<Deliverable>, ApiError> {
        let uow = state.data_context.read()?;
        let deliverable = uow.deliverables().get(id)?.ok_or_else(|| ApiError::not_found("Deliverable", id))?;
        Ok(Json(deliverable))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
        JsonBody(body): JsonBody<DeliverableEditRequest>,
    ) -> Result<Json<Deliverable>, ApiError> {
        let uow = state.data_context.begin()?;
        let mut deliverable = uow.deliverables().get(id)?.ok_or_else(|| ApiError::not_found("Deliverable", id))?;
        deliverable.apply(body);
        uow.deliverables().update(&deliverable)?;
        uow.save()?;
        Ok(Json(deliverable))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.deliverables().delete(id)? {
            return Err(ApiError::not_found("Deliverable", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
