//! Convenience result type alias for MemberHub.

use crate::error::AppError;

/// A specialized `Result` type for MemberHub operations.
///
/// Write paths of every repository and service return this type; read
/// paths return plain values.
pub type AppResult<T> = Result<T, AppError>;
