use thiserror::Error;
use validator::ValidationErrors;

use crate::db::DatabaseError;
use crate::scheduling::{BatchErrors, ScheduleError};

/// Crate-level error taxonomy. Scheduling rejections stay distinguishable
/// from storage failures so callers can render a precise, recoverable
/// message for the former and treat the latter as a system fault.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Scheduling error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Working hours rejected: {0}")]
    WorkingHours(#[from] BatchErrors),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(DatabaseError::from(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
