//! HTTP inbound adapter exposing the REST endpoints under `/api/v1`.

pub mod calls;
pub mod error;
pub mod extractors;
pub mod gifts;
pub mod health;
pub mod listing;
pub mod resources;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

/// Register the extractor configs and every `/api/v1` endpoint on `cfg`.
///
/// Callers mount this inside the scope that carries the session middleware.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use crm_backend::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::json_config())
        .app_data(extractors::path_config())
        .app_data(extractors::query_config())
        .service(users::login)
        .service(users::logout)
        .service(calls::list_calls)
        .service(calls::create_call)
        .service(calls::get_call)
        .service(calls::update_call)
        .service(calls::delete_call)
        .service(calls::list_contact_calls)
        .service(gifts::list_gifts)
        .service(gifts::get_gift)
        .service(gifts::list_contact_gifts);
}
