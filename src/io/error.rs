//! Error types for layout generation and its surrounding I/O

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all layout operations
#[derive(Debug, Error)]
pub enum LayoutError {
    /// No category matches the requested id or name
    #[error("Category '{reference}' not found")]
    CategoryNotFound {
        /// Category id or display name as given by the caller
        reference: String,
    },

    /// No subcategory matches the requested id or name
    #[error("Subcategory '{reference}' not found")]
    SubcategoryNotFound {
        /// Subcategory id or display name as given by the caller
        reference: String,
    },

    /// The resolved category has no slot list, or an empty one
    #[error("No slots defined for category '{category}'")]
    EmptySlotList {
        /// Id of the resolved category
        category: String,
    },

    /// Request or option validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog content violates its contract
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog {
        /// Description of the violated rule
        reason: String,
    },

    /// Catalog file could not be parsed
    #[error("Failed to parse catalog '{}': {source}", path.display())]
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Failed to save the preview image to disk
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Layout could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LayoutError {
    /// Whether the error is a catalog lookup failure
    ///
    /// These are the configuration errors a caller surfaces to the end user:
    /// unknown category, unknown subcategory, or a category without slots.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound { .. }
                | Self::SubcategoryNotFound { .. }
                | Self::EmptySlotList { .. }
        )
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> LayoutError {
    LayoutError::InvalidCatalog {
        reason: reason.to_string(),
    }
}
