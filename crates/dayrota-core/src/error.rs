//! Core error types for dayrota-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use thiserror::Error;

/// Core error type for dayrota-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Manual assignment errors
    #[error("Assignment error: {0}")]
    Assign(#[from] AssignError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// A persisted row failed to parse back into its model type
    #[error("Invalid persisted data: {0}")]
    InvalidData(String),

    /// Row not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Errors from explicit (non-planner) assignment operations.
#[derive(Error, Debug)]
pub enum AssignError {
    /// The task already holds an assignment, possibly for another date
    #[error("Task {task_id} is already assigned")]
    AlreadyAssigned { task_id: String },

    /// The task is completed or unknown
    #[error("Task {task_id} is not open for assignment")]
    NotAssignable { task_id: String },

    /// The assignment to replace does not exist
    #[error("Assignment not found: {0}")]
    AssignmentNotFound(String),

    /// Underlying storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
