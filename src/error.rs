//! Error types for gcpro
//!
//! All errors derive from `thiserror` for convenient error handling and
//! automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use gcpro::error::{GcproError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // io::Error converts automatically via `?`
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gcpro operations
#[derive(Error, Debug)]
pub enum GcproError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// No counter data file found
    #[error("No counter data found at {0}")]
    StoreNotFound(PathBuf),

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in gcpro
///
/// # Example
///
/// ```
/// use gcpro::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("ok".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, GcproError>;
