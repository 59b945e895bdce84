pub mod authentication_routes;
pub mod health_routes;
pub mod user_routes;
pub mod freelancer_profile_routes;
pub mod project_routes;
pub mod project_request_routes;
pub mod project_assignment_routes;
pub mod task_routes;
pub mod subtask_routes;
pub mod log_routes;
pub mod milestone_routes;
pub mod timesheet_routes;
pub mod payment_routes;
pub mod deliverable_routes;
pub mod feedback_routes;
pub mod message_routes;

use std::sync::Arc;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use crate::app_state::AppState;

pub const API_PREFIX: &str = "/api";

/// The whole service: JSON API under `/api`, the static frontend as fallback.
pub fn build_app(app_state: Arc<AppState>) -> Router {
    let static_files_dir = app_state.settings.static_files_dir.clone();
    let mut app = Router::new().nest(API_PREFIX, map_routes(app_state));
    if let Some(dir) = static_files_dir {
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }
    app.layer(TraceLayer::new_for_http()).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

pub fn map_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes::get_router())
        .merge(authentication_routes::get_router(app_state.clone()))
        .merge(user_routes::get_router(app_state.clone()))
        .merge(freelancer_profile_routes::get_router(app_state.clone()))
        .merge(project_routes::get_router(app_state.clone()))
        .merge(project_request_routes::get_router(app_state.clone()))
        .merge(project_assignment_routes::get_router(app_state.clone()))
        .merge(task_routes::get_router(app_state.clone()))
        .merge(subtask_routes::get_router(app_state.clone()))
        .merge(log_routes::get_router(app_state.clone()))
        .merge(milestone_routes::get_router(app_state.clone()))
        .merge(timesheet_routes::get_router(app_state.clone()))
        .merge(payment_routes::get_router(app_state.clone()))
        .merge(deliverable_routes::get_router(app_state.clone()))
        .merge(feedback_routes::get_router(app_state.clone()))
        .merge(message_routes::get_router(app_state))
}
