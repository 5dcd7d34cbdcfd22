// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for Headway input handling
#[derive(Error, Debug, Diagnostic)]
pub enum HeadwayError {
    /// Value could not be read as an integer
    #[error("Invalid {field}: '{value}' is not an integer")]
    #[diagnostic(
        code(headway::parse_error),
        help("Cylinder addresses must be whole numbers, e.g. 98,183,37")
    )]
    ParseError {
        #[allow(unused)]
        value: String,
        #[allow(unused)]
        field: String,
    },

    /// Address outside [0, disk_size)
    #[error("Invalid {field}: cylinder {value} is outside the disk (size {disk_size})")]
    #[diagnostic(
        code(headway::range_error),
        help("Addresses must be between 0 and {max_cylinder}")
    )]
    RangeError {
        #[allow(unused)]
        value: String,
        #[allow(unused)]
        field: String,
        #[allow(unused)]
        disk_size: u32,
        #[allow(unused)]
        max_cylinder: u32,
    },

    /// Disk size cannot hold any cylinder
    #[error("Invalid disk size: {disk_size}")]
    #[diagnostic(
        code(headway::invalid_disk_size),
        help("The disk size must be at least 1 cylinder (default is 1000)")
    )]
    InvalidDiskSize {
        #[allow(unused)]
        disk_size: i64,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    #[diagnostic(
        code(headway::serialization_error),
        help("This is likely a bug. Please report it with the full error details")
    )]
    SerializationError {
        #[allow(unused)]
        message: String,
        #[source]
        #[allow(unused)]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for Headway core operations
pub type Result<T> = std::result::Result<T, HeadwayError>;

impl HeadwayError {
    /// Create a ParseError
    pub fn parse_error(value: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ParseError {
            value: value.into(),
            field: field.into(),
        }
    }

    /// Create a RangeError
    pub fn range_error(value: impl ToString, field: impl Into<String>, disk_size: u32) -> Self {
        Self::RangeError {
            value: value.to_string(),
            field: field.into(),
            disk_size,
            max_cylinder: disk_size.saturating_sub(1),
        }
    }

    /// Create an InvalidDiskSize error
    pub fn invalid_disk_size(disk_size: i64) -> Self {
        Self::InvalidDiskSize { disk_size }
    }

    /// Create a SerializationError
    pub fn serialization_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source,
        }
    }
}
