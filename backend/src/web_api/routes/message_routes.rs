use std::sync::Arc;
use axum::{Router, middleware, routing::{get, post, put, delete}};
use crate::{app_state::AppState, authentication::auth::auth_middleware, message_controller::MessageController};

pub const ROUTER_PATH: &str = "/messages";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, post(MessageController::send))
        .route(format!("{}/user/:user_id", ROUTER_PATH).as_str(), get(MessageController::get_for_user))
        .route(
            format!("{}/conversation/:user_id/:other_user_id", ROUTER_PATH).as_str(),
            get(MessageController::get_conversation),
        )
        .route(format!("{}/:id/read", ROUTER_PATH).as_str(), put(MessageController::mark_read))
        .route(format!("{}/:id", ROUTER_PATH).as_str(), delete(MessageController::delete))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
