use std::sync::Arc;
use axum::{Router, middleware, routing::get};
use crate::{app_state::AppState, authentication::auth::auth_middleware, subtask_controller::SubtaskController};

pub const ROUTER_PATH: &str = "/subtasks";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(SubtaskController::get_all).post(SubtaskController::add))
        .route(format!("{}/task/:task_id", ROUTER_PATH).as_str(), get(SubtaskController::get_by_task))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(SubtaskController::get).put(SubtaskController::edit).delete(SubtaskController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
