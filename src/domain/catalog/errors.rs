//! Catalog domain errors

use thiserror::Error;

/// Errors surfaced by catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No record with the requested id
    #[error("Record not found: {id}")]
    NotFound { id: String },

    /// Payload failed domain validation
    #[error("Validation error: {reason}")]
    Validation { reason: String },

    /// Store-level failure
    #[error("Database error: {message}")]
    Database { message: String },
}

impl CatalogError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
