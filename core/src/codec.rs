//! # Model Codec
//!
//! Reads and writes serialized models so passes can run between a parser and a
//! renderer living in separate processes.

use crate::error::{AppError, AppResult};
use crate::model::Model;
use std::path::Path;

/// Serialization format of a model document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl ModelFormat {
    /// Infers the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ModelFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(ModelFormat::Yaml)
            }
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for ModelFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ModelFormat::Json),
            "yaml" | "yml" => Ok(ModelFormat::Yaml),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parses a model document.
pub fn parse_model(text: &str, format: ModelFormat) -> AppResult<Model> {
    let model = match format {
        ModelFormat::Json => serde_json::from_str(text)?,
        ModelFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(model)
}

/// Renders a model document. JSON output is pretty-printed.
pub fn render_model(model: &Model, format: ModelFormat) -> AppResult<String> {
    let text = match format {
        ModelFormat::Json => serde_json::to_string_pretty(model)?,
        ModelFormat::Yaml => serde_yaml::to_string(model)?,
    };
    Ok(text)
}

/// Reads and parses a model file, inferring the format from its extension
/// unless one is given.
pub fn read_model(path: &Path, format: Option<ModelFormat>) -> AppResult<Model> {
    let format = match format {
        Some(format) => format,
        None => ModelFormat::from_path(path)?,
    };
    let text = std::fs::read_to_string(path)?;
    parse_model(&text, format)
}
