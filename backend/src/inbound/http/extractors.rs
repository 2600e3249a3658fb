//! Extractor error handlers.
//!
//! Actix rejects unparsable bodies, paths and queries before a handler runs.
//! These configs turn those rejections into the domain error envelope so
//! clients always see a numeric `error_code`.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::malformed_json("").into()
}

/// Non-numeric ids cannot name a stored row, so they are reported as missing.
fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameters");
    Error::resource_not_found().into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    Error::invalid_parameters("").into()
}

/// JSON body config mapping parse failures to `error_code` 37.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Path config mapping unparsable ids to `error_code` 31.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

/// Query config mapping unparsable parameters to `error_code` 41.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}
