pub mod error_handler;
pub mod identity;

pub use error_handler::{configure_extractors, json_error_handler, query_error_handler};
