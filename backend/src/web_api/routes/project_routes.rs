use std::sync::Arc;
use axum::{Router, middleware, routing::get};
use crate::{app_state::AppState, authentication::auth::auth_middleware, project_controller::ProjectController};

pub const ROUTER_PATH: &str = "/projects";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(ProjectController::get_all).post(ProjectController::add))
        .route(format!("{}/deadline", ROUTER_PATH).as_str(), get(ProjectController::get_by_deadline))
        .route(format!("{}/category/:category", ROUTER_PATH).as_str(), get(ProjectController::get_by_category))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(ProjectController::get).put(ProjectController::edit).delete(ProjectController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
