use std::sync::Arc;
use axum::{Router, middleware, routing::get};
use crate::{app_state::AppState, authentication::auth::auth_middleware, deliverable_controller::DeliverableController};

pub const ROUTER_PATH: &str = "/deliverables";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(DeliverableController::get_all).post(DeliverableController::add))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(DeliverableController::get)
                .put(DeliverableController::edit)
                .delete(DeliverableController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
