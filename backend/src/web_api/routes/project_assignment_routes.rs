use std::sync::Arc;
use axum::{Router, middleware, routing::{get, post, delete}};
use crate::{
    app_state::AppState, authentication::auth::auth_middleware,
    project_assignment_controller::ProjectAssignmentController,
};

pub const ROUTER_PATH: &str = "/project-freelancers";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, post(ProjectAssignmentController::add))
        .route(
            format!("{}/project/:project_id", ROUTER_PATH).as_str(),
            get(ProjectAssignmentController::get_freelancers),
        )
        .route(
            format!("{}/:project_id/:freelancer_id", ROUTER_PATH).as_str(),
            delete(ProjectAssignmentController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
