use std::sync::Arc;
use axum::{Router, middleware, routing::{get, put}};
use crate::{app_state::AppState, authentication::auth::auth_middleware, timesheet_controller::TimesheetController};

pub const ROUTER_PATH: &str = "/timesheets";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(TimesheetController::get_all).post(TimesheetController::add))
        .route(format!("{}/freelancer/:name", ROUTER_PATH).as_str(), get(TimesheetController::get_by_freelancer))
        .route(format!("{}/project/:name", ROUTER_PATH).as_str(), get(TimesheetController::get_by_project))
        .route(format!("{}/date/:date", ROUTER_PATH).as_str(), get(TimesheetController::get_by_date))
        .route(format!("{}/:id/approve", ROUTER_PATH).as_str(), put(TimesheetController::approve))
        .route(format!("{}/:id/reject", ROUTER_PATH).as_str(), put(TimesheetController::reject))
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TimesheetController::get).put(TimesheetController::edit).delete(TimesheetController::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .with_state(app_state)
}
