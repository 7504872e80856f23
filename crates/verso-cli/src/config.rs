use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Name of the configuration file searched for
pub const CONFIG_FILE: &str = "verso.toml";

/// Environment variable overriding the configured output format
pub const FORMAT_ENV: &str = "VERSO_FORMAT";

/// The main verso configuration file structure (verso.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersoConfig {
    /// Output configuration
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: Option<OutputFormat>,

    /// Force colors on or off, auto-detected when absent
    pub color: Option<bool>,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format \"{}\", expected \"text\" or \"json\"", other),
        }
    }
}

/// Effective output settings after merging every source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub color: Option<bool>,
}

impl VersoConfig {
    /// Load configuration from verso.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Loading configuration from {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: VersoConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                log::trace!("No {} found above {}", CONFIG_FILE, start_dir.display());
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}

/// Merge output settings
///
/// Command line flags win over the environment, which wins over the
/// configuration file.
pub fn resolve_output(
    config: Option<&VersoConfig>,
    format_flag: Option<OutputFormat>,
    color_flag: Option<bool>,
    format_env: Option<&str>,
) -> Result<OutputSettings> {
    let env_format = format_env
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.parse::<OutputFormat>())
        .transpose()
        .with_context(|| format!("Invalid {} environment variable", FORMAT_ENV))?;

    let format = format_flag
        .or(env_format)
        .or_else(|| config.and_then(|c| c.output.format))
        .unwrap_or_default();
    let color = color_flag.or_else(|| config.and_then(|c| c.output.color));

    Ok(OutputSettings { format, color })
}
