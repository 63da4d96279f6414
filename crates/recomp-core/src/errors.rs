// ABOUTME: Unified error type and error codes for the recomposition planner
// ABOUTME: Covers validation, catalog integrity, configuration and external lookup failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the planner returns an [`AppError`]. The error carries a
//! stable [`ErrorCode`] so that whichever transport embeds the library can map it to its
//! own status vocabulary without string matching.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed or inconsistent input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A numeric field is outside its accepted bounds
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Data integrity (4000-4499)
    /// The food catalog lacks a category the meal engine requires
    #[serde(rename = "CATALOG_INCOMPLETE")]
    CatalogIncomplete = 4100,
    /// The food catalog declares the same food twice
    #[serde(rename = "DUPLICATE_FOOD")]
    DuplicateFood = 4101,

    // External Services (5000-5999)
    /// An external collaborator returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// An external collaborator did not answer in time
    #[serde(rename = "EXTERNAL_SERVICE_TIMEOUT")]
    ExternalServiceTimeout = 5004,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed or is inconsistent
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Storage and encoding (9000-9999)
    /// Reading catalog or input files failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::CatalogIncomplete => "The food catalog is missing a required category",
            Self::DuplicateFood => "The food catalog contains a duplicate entry",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceTimeout => "An external service did not respond in time",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the caller can fix the failure by changing its input
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::ValueOutOfRange)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the offending resource (field name, food name, file path)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric field outside of its accepted bounds
    pub fn value_out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_resource_id(field)
    }

    /// Catalog integrity failure (missing category)
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogIncomplete, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External service did not answer within `timeout_ms`
    pub fn external_timeout(service: impl Into<String>, timeout_ms: u64) -> Self {
        Self::new(
            ErrorCode::ExternalServiceTimeout,
            format!("{} did not respond within {timeout_ms} ms", service.into()),
        )
        .with_details(json!({ "timeout_ms": timeout_ms }))
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message naming the failed constraint
    pub message: String,
    /// Offending field or resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Extra structured context
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                resource_id: error.context.resource_id,
                details: error.context.details,
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ErrorCode::InvalidInput.is_client_error());
        assert!(ErrorCode::ValueOutOfRange.is_client_error());
        assert!(!ErrorCode::CatalogIncomplete.is_client_error());
        assert!(!ErrorCode::ExternalServiceTimeout.is_client_error());
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::value_out_of_range("age", "age must be between 14 and 90");

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.resource_id.as_deref(), Some("age"));
        assert!(error.to_string().contains("between 14 and 90"));
    }

    #[test]
    fn test_external_timeout_carries_limit() {
        let error = AppError::external_timeout("fixture", 250);
        assert_eq!(error.code, ErrorCode::ExternalServiceTimeout);
        assert_eq!(error.context.details["timeout_ms"], 250);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::data_integrity("catalog has no fat foods")
            .with_details(json!({ "category": "fat" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("CATALOG_INCOMPLETE"));
        assert!(json.contains("category"));
    }
}
