use axum::{extract::{Path, State}, http::StatusCode, Extension, Json};

use crate::{
    api_error::ApiError, app_state::SharedState, json_body::JsonBody, message::Message,
    message_send_request::MessageSendRequest, user::User,
};

pub struct MessageController {}

impl MessageController {
    pub async fn send(
        State(state): State<SharedState>,
        Extension(caller): Extension<User>,
        JsonBody(body): JsonBody<MessageSendRequest>,
    ) -> Result<(StatusCode, Json<Message>), ApiError> {
        if body.content.trim().is_empty() && body.upload.is_none() {
            return Err(ApiError::BadRequest("content or upload is required".to_string()));
        }
        let uow = state.data_context.begin()?;
        if uow.users().get(body.receiver_id)?.is_none() {
            return Err(ApiError::BadRequest(format!("User {} does not exist", body.receiver_id)));
        }
        let mut message = Message::new(body, caller.id);
        uow.messages().add(&mut message)?;
        uow.save()?;
        Ok((StatusCode::CREATED, Json(message)))
    }

    pub async fn get_conversation(
        State(state): State<SharedState>,
        Path((user_id, other_user_id)): Path<(u64, u64)>,
    ) -> Result<Json<Vec<Message>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.messages().get_conversation(user_id, other_user_id)?))
    }

    pub async fn get_for_user(
        State(state): State<SharedState>,
        Path(user_id): Path<u64>,
    ) -> Result<Json<Vec<Message>>, ApiError> {
        let uow = state.data_context.read()?;
        Ok(Json(uow.messages().get_for_user(user_id)?))
    }

    pub async fn mark_read(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<Json<Message>, ApiError> {
        let uow = state.data_context.begin()?;
        let mut message = uow.messages().get(id)?.ok_or_else(|| ApiError::not_found("Message", id))?;
        message.is_read = true;
        uow.messages().update(&message)?;
        uow.save()?;
        Ok(Json(message))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<u64>,
    ) -> Result<StatusCode, ApiError> {
        let uow = state.data_context.begin()?;
        if !uow.messages().delete(id)? {
            return Err(ApiError::not_found("Message", id));
        }
        uow.save()?;
        Ok(StatusCode::NO_CONTENT)
    }
}
