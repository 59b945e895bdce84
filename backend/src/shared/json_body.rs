use axum::extract::FromRequest;

use crate::shared::api_error::ApiError;

/// `axum::Json` whose rejections come back as `ApiError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
