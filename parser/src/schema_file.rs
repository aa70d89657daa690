//! Schema files.
//!
//! A [`CliSchema`] can be kept on disk as YAML (`.yaml` / `.yml`) or JSON
//! (any other extension). Callbacks are not part of the file format.
//!
//! # Example YAML
//!
//! ```yaml
//! name: deploy
//! options:
//!   - name: target
//!     short: -t
//!     long: --target
//!     required: true
//!   - name: ports
//!     short: -p
//!     value_type: number
//!     arity: "+"
//! flags:
//!   - name: verbose
//!     short: -v
//! command_groups:
//!   - name: action
//!     required: true
//!     commands:
//!       - name: up
//!       - name: down
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use argschema_core::CliSchema;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading or writing schema files.
#[derive(Debug, Error)]
pub enum SchemaFileError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Serialization format of a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Picks the format from a file extension; anything but YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Loads a schema from a YAML or JSON file.
///
/// # Errors
///
/// Returns [`IoError`](SchemaFileError::IoError) if the file cannot be
/// read, or a JSON/YAML error if parsing fails.
pub fn load_schema(path: impl AsRef<Path>) -> Result<CliSchema, SchemaFileError> {
    let path = path.as_ref();
    let format = SchemaFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading schema file");

    let reader = BufReader::new(std::fs::File::open(path)?);
    let schema = match format {
        SchemaFormat::Json => serde_json::from_reader(reader)?,
        SchemaFormat::Yaml => serde_yaml::from_reader(reader)?,
    };
    Ok(schema)
}

/// Saves a schema in the format matching the file extension.
///
/// # Errors
///
/// Returns [`IoError`](SchemaFileError::IoError) if the file cannot be
/// written, or a JSON/YAML error if serialization fails.
pub fn save_schema(schema: &CliSchema, path: impl AsRef<Path>) -> Result<(), SchemaFileError> {
    let path = path.as_ref();
    let writer = BufWriter::new(std::fs::File::create(path)?);
    match SchemaFormat::from_path(path) {
        SchemaFormat::Json => serde_json::to_writer_pretty(writer, schema)?,
        SchemaFormat::Yaml => serde_yaml::to_writer(writer, schema)?,
    }
    Ok(())
}

/// Parses a schema from YAML text.
pub fn schema_from_yaml(raw: &str) -> Result<CliSchema, SchemaFileError> {
    Ok(serde_yaml::from_str(raw)?)
}
