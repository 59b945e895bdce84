use std::sync::Arc;
use axum::{Router, middleware, routing::{get, post, put, delete}};
use crate::{
    app_state::AppState, authentication::auth::auth_middleware,
    project_request_controller::ProjectRequestController,
};

pub const ROUTER_PATH: &str = "/project-requests";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, post(ProjectRequestController::add))
        .route(
            format!("{}/freelancer/:freelancer_id", ROUTER_PATH).as_str(),
            get(ProjectRequestController::get_by_freelancer),
        )
        .route(
            format!("{}/project/:project_id", ROUTER_PATH).as_str(),
            get(ProjectRequestController::get_by_project),
        )
        .route(format!("{}/:id/status", ROUTER_PATH).as_str(), put(ProjectRequestController::update_status))
        .route(format!("{}/:id", ROUTER_PATH).as_str(), delete(ProjectRequestController::delete))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
