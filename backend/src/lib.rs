//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
}

pub use web_api::routes::{build_app, map_routes};
pub use web_api::controllers::*;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
    pub mod api_error;
    pub mod json_body;
}

pub use shared::models::*;
pub use shared::dto::*;
pub use shared::{api_error, json_body};
//---------------------------------------

//---------------------------------------
pub mod authentication {
    pub mod auth;
}
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
    pub mod data_error;
    pub mod record;
    pub mod unit_of_work;
    pub mod repositories;
}
//---------------------------------------
