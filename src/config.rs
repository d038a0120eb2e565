//! Configuration for the generator CLI
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (guardgen.toml)
//! - Environment variables (GUARDGEN_*)
//!
//! ## Example config file (guardgen.toml):
//! ```toml
//! [output]
//! header = true
//! path = "./generated/validators.ts"
//!
//! [lint]
//! unreferenced_type = "warn"
//! empty_path = "warn"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Lint levels
    #[serde(default)]
    pub lint: LintConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit the generated-file banner
    #[serde(default = "default_true")]
    pub header: bool,

    /// Where to write the document (stdout when unset)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Lint level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Registry entries no reference points at
    #[serde(default = "default_warn")]
    pub unreferenced_type: DiagnosticLevel,

    /// Endpoints with no path segments
    #[serde(default = "default_warn")]
    pub empty_path: DiagnosticLevel,
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warn,
    Ignore,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_warn() -> DiagnosticLevel {
    DiagnosticLevel::Warn
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: true,
            path: None,
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            unreferenced_type: DiagnosticLevel::Warn,
            empty_path: DiagnosticLevel::Warn,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        builder = builder.add_source(File::with_name("guardgen").required(false));

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        // Load from environment variables (GUARDGEN_*)
        builder = builder.add_source(
            Environment::with_prefix("GUARDGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
