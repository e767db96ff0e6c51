//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! The enrichment pass itself never fails; these errors come from loading and
//! writing serialized models.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A JSON model could not be decoded or encoded.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// A YAML model could not be decoded or encoded.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The model format could not be determined (e.g. unknown file extension).
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Unsupported model format: {_0}")]
    UnsupportedFormat(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
