use std::sync::Arc;
use axum::{Router, middleware, routing::get};
use crate::{app_state::AppState, authentication::auth::auth_middleware, user_controller::UserController};

pub const ROUTER_PATH: &str = "/users";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(UserController::get_all))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(UserController::get).put(UserController::edit).delete(UserController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
