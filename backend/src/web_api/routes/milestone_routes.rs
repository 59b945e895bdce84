use std::sync::Arc;
use axum::{Router, middleware, routing::{get, put}};
use crate::{app_state::AppState, authentication::auth::auth_middleware, milestone_controller::MilestoneController};

pub const ROUTER_PATH: &str = "/milestones";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(MilestoneController::get_all).post(MilestoneController::add))
        .route(format!("{}/pending", ROUTER_PATH).as_str(), get(MilestoneController::get_pending))
        .route(format!("{}/submitted", ROUTER_PATH).as_str(), get(MilestoneController::get_submitted))
        .route(format!("{}/under-review", ROUTER_PATH).as_str(), get(MilestoneController::get_under_review))
        .route(format!("{}/project/:project_id", ROUTER_PATH).as_str(), get(MilestoneController::get_by_project))
        .route(format!("{}/:id/submit", ROUTER_PATH).as_str(), put(MilestoneController::submit))
        .route(format!("{}/:id/approve", ROUTER_PATH).as_str(), put(MilestoneController::approve))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(MilestoneController::get).put(MilestoneController::edit).delete(MilestoneController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
