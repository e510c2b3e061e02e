pub mod error;
pub mod money;
pub mod result;
pub mod scope;
pub mod timezone;
pub mod traits;

pub use error::{AppError, Result};
pub use result::DatabaseResult;
pub use scope::{Role, Scope, Session};
