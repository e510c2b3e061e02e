use actix_web::{error, HttpRequest};
use tracing::debug;

use crate::core::AppError;

/// Malformed JSON bodies become the usual `{"error": {...}}` validation response
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "Rejected JSON payload");
    AppError::validation(err.to_string()).into()
}

/// Same treatment for unparseable query strings such as a bad date
pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "Rejected query string");
    AppError::validation(err.to_string()).into()
}

/// Shared extractor configuration for every app instance
pub fn configure_extractors(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.app_data(actix_web::web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(actix_web::web::QueryConfig::default().error_handler(query_error_handler));
}
