//! Output configuration for pharmaplot.
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML file
//! (an explicit path, or `pharmaplot.toml` in the working directory), then
//! `PHARMAPLOT_*` environment variables (`PHARMAPLOT_OUTPUT_DIR`,
//! `PHARMAPLOT_LOG_LEVEL`, `PHARMAPLOT_FORMAT`).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use pharma_core::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use serde::{Deserialize, Serialize};

/// Encoding of evaluated curves on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}`, expected csv or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Directory rendered pages are written to.
    pub output_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "pharma_plot=debug").
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let output_dir = dirs::data_dir()
            .map(|d| d.join("pharmaplot").join("html"))
            .unwrap_or_else(|| PathBuf::from("html"));

        Self {
            output_dir,
            log_level: "info".to_string(),
            format: OutputFormat::Csv,
        }
    }
}

impl PlotConfig {
    /// Load from defaults, the config file and the process environment.
    ///
    /// With `path` the file must exist; without it `pharmaplot.toml` is read
    /// from the working directory if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// As [`load`](Self::load), reading environment overrides from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let file = match path {
            Some(p) => File::from(p).format(FileFormat::Toml).required(true),
            None => File::new(CONFIG_FILE_NAME, FileFormat::Toml).required(false),
        };

        Config::builder()
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("log_level", defaults.log_level)?
            .set_default("format", defaults.format.to_string())?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?
            .try_deserialize()
    }
}
