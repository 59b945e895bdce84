use std::sync::Arc;
use axum::{Router, middleware, routing::get};
use crate::{
    app_state::AppState, authentication::auth::auth_middleware,
    freelancer_profile_controller::FreelancerProfileController,
};

pub const ROUTER_PATH: &str = "/freelancer-profiles";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            get(FreelancerProfileController::get_all).post(FreelancerProfileController::add),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(FreelancerProfileController::get)
                .put(FreelancerProfileController::edit)
                .delete(FreelancerProfileController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
