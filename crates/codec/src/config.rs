//! Converter configuration via `attrmap.toml`
//!
//! Every field is optional; a missing field takes the store's default.

use attrmap_core::limits::{DEFAULT_MAX_ITEM_BYTES, DEFAULT_MAX_NESTING_DEPTH};
use attrmap_core::Limits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "attrmap.toml";

/// Converter configuration.
///
/// # Example
///
/// ```toml
/// # Maximum list/map nesting depth (default: 32)
/// max_nesting_depth = 32
///
/// # Maximum item size in bytes, 0 disables the check (default: 409600)
/// max_item_bytes = 409600
///
/// # Drop null fields instead of storing NULL attributes (default: false)
/// omit_nulls = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Maximum nesting depth of lists and maps.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
    /// Maximum accounted item size in bytes; `0` disables the check.
    #[serde(default = "default_max_item_bytes")]
    pub max_item_bytes: usize,
    /// Drop `null` document fields instead of emitting `NULL` attributes.
    #[serde(default)]
    pub omit_nulls: bool,
}

fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

fn default_max_item_bytes() -> usize {
    DEFAULT_MAX_ITEM_BYTES
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: default_max_nesting_depth(),
            max_item_bytes: default_max_item_bytes(),
            omit_nulls: false,
        }
    }
}

impl ConverterConfig {
    /// Limits enforced by the attribute codec
    pub fn limits(&self) -> Limits {
        Limits {
            max_nesting_depth: self.max_nesting_depth,
            max_item_bytes: self.max_item_bytes,
        }
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `max_nesting_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_nesting_depth must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# attrmap converter configuration
#
# Maximum list/map nesting depth (default: 32)
max_nesting_depth = 32

# Maximum item size in bytes (default: 409600, the store's 400 KB limit)
# Set to 0 to disable the check.
max_item_bytes = 409600

# Drop null fields instead of storing NULL attributes (default: false)
omit_nulls = false
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for this config
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field has an invalid value
    #[error("Invalid config: {0}")]
    Invalid(String),
}
