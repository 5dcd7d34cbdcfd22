//! Headway Core - Fundamental types for disk head scheduling
//!
//! This crate provides:
//! - Cylinder addresses and disk geometry
//! - Input validation for request sets and head positions
//! - Error types with miette diagnostics
//! - Serialization helpers for reports

pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{HeadwayError, Result};
pub use types::{Cylinder, DiskGeometry, DEFAULT_DISK_SIZE};
pub use validation::{
    parse_request_list, validate_input, validate_tokens, validate_values, ValidatedInput,
};

/// Serialize a value to JSON
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| {
        HeadwayError::serialization_error(
            format!("Failed to serialize to JSON: {}", e),
            Some(Box::new(e)),
        )
    })
}

/// Serialize a value to pretty JSON
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        HeadwayError::serialization_error(
            format!("Failed to serialize to JSON: {}", e),
            Some(Box::new(e)),
        )
    })
}

/// Serialize a value to YAML
pub fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| {
        HeadwayError::serialization_error(
            format!("Failed to serialize to YAML: {}", e),
            Some(Box::new(e)),
        )
    })
}
