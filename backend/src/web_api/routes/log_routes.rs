use std::sync::Arc;
use axum::{Router, middleware, routing::{get, put, delete}};
use crate::{app_state::AppState, authentication::auth::auth_middleware, log_controller::LogController};

pub const ROUTER_PATH: &str = "/logs";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(LogController::get_all).post(LogController::add))
        .route(format!("{}/task/:task_id", ROUTER_PATH).as_str(), get(LogController::get_by_task))
        .route(format!("{}/task/:task_id/first", ROUTER_PATH).as_str(), get(LogController::get_first_for_task))
        .route(format!("{}/:id/stop", ROUTER_PATH).as_str(), put(LogController::stop))
        .route(format!("{}/:id", ROUTER_PATH).as_str(), delete(LogController::delete))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
