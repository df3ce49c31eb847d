//! Convenience result type alias for Curio.

use crate::error::AppError;

/// A specialized `Result` type for Curio operations.
pub type AppResult<T> = Result<T, AppError>;
