use std::sync::Arc;
use axum::{Router, middleware, routing::get};
use crate::{app_state::AppState, authentication::auth::auth_middleware, payment_controller::PaymentController};

pub const ROUTER_PATH: &str = "/payments";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(PaymentController::get_all).post(PaymentController::add))
        .route(format!("{}/project/:project_id", ROUTER_PATH).as_str(), get(PaymentController::get_by_project))
        .route(
            format!("{}/freelancer/:freelancer_id", ROUTER_PATH).as_str(),
            get(PaymentController::get_by_freelancer),
        )
        .route(format!("{}/client/:client_id", ROUTER_PATH).as_str(), get(PaymentController::get_by_client))
        .route(format!("{}/:id", ROUTER_PATH).as_str(), get(PaymentController::get))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
