use serde::Serialize;
use tracing::warn;

use super::error::AppError;

/// `{data, error}` pair returned by every facade operation.
///
/// Exactly one side is populated: `data` on success, `error` on failure.
/// Operations that only acknowledge (deletes) succeed with `data: Some(())`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseResult<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> DatabaseResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// Convert a service result, using `fallback` as the message for
    /// unexpected failures.
    pub fn from_result(result: crate::core::Result<T>, fallback: &str) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                if !matches!(e, AppError::NotFound(_) | AppError::Validation(_)) {
                    warn!(error = %e, "{}", fallback);
                }
                Self::err(e.public_message(fallback))
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err("empty result".to_string()),
        }
    }
}
