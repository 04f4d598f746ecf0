//! TOML configuration.
//!
//! The platform config file (`<config_dir>/citedex/config.toml`) is read
//! first and `./.citedex.toml` overrides it field by field. An explicit
//! `--config` path replaces both.

use std::path::{Path, PathBuf};

use anyhow::Context;
use citedex_core::DEFAULT_OUTLIER_SIGMA;
use serde::{Deserialize, Serialize};

use crate::storage;

const LOCAL_CONFIG_FILE: &str = ".citedex.toml";

/// On-disk configuration. All fields are optional so partial files work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub analysis: Option<AnalysisConfig>,
    pub files: Option<FilesConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    pub outlier_sigma: Option<f64>,
    pub default_thresholds: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    pub list: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub filter: Option<String>,
}

/// Configuration with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub outlier_sigma: f64,
    pub default_thresholds: Vec<u32>,
    pub list_file: PathBuf,
    pub summary_file: PathBuf,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            outlier_sigma: DEFAULT_OUTLIER_SIGMA,
            default_thresholds: vec![10, 25, 50],
            list_file: PathBuf::from("list.txt"),
            summary_file: PathBuf::from("summary.txt"),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_file(file: ConfigFile) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let analysis = file.analysis.unwrap_or_default();
        let files = file.files.unwrap_or_default();
        let log = file.log.unwrap_or_default();

        let outlier_sigma = analysis.outlier_sigma.unwrap_or(defaults.outlier_sigma);
        if !outlier_sigma.is_finite() || outlier_sigma <= 0.0 {
            anyhow::bail!("analysis.outlier_sigma must be a positive number, got {outlier_sigma}");
        }

        Ok(Self {
            outlier_sigma,
            default_thresholds: analysis
                .default_thresholds
                .unwrap_or(defaults.default_thresholds),
            list_file: files.list.unwrap_or(defaults.list_file),
            summary_file: files.summary.unwrap_or(defaults.summary_file),
            log_filter: log.filter,
        })
    }
}

/// Platform config file path: `<config_dir>/citedex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("citedex").join("config.toml"))
}

/// Loads the configuration.
///
/// With `explicit` set, only that file is read and it must exist. Otherwise
/// the platform file and `./.citedex.toml` are cascaded; missing files are
/// skipped.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let file = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let platform = config_path()
                .filter(|p| p.exists())
                .map(|p| load_from_path(&p))
                .transpose()?;
            let local_path = Path::new(LOCAL_CONFIG_FILE);
            let local = local_path
                .exists()
                .then(|| load_from_path(local_path))
                .transpose()?;
            match (platform, local) {
                (None, None) => ConfigFile::default(),
                (Some(p), None) => p,
                (None, Some(c)) => c,
                (Some(p), Some(c)) => merge(p, c),
            }
        }
    };
    Config::from_file(file)
}

/// Reads and parses a single config file.
pub fn load_from_path(path: &Path) -> anyhow::Result<ConfigFile> {
    let content = storage::read_text_file("config", path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merges two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_analysis = base.analysis.unwrap_or_default();
    let overlay_analysis = overlay.analysis.unwrap_or_default();
    let base_files = base.files.unwrap_or_default();
    let overlay_files = overlay.files.unwrap_or_default();
    let base_log = base.log.unwrap_or_default();
    let overlay_log = overlay.log.unwrap_or_default();

    ConfigFile {
        analysis: Some(AnalysisConfig {
            outlier_sigma: overlay_analysis.outlier_sigma.or(base_analysis.outlier_sigma),
            default_thresholds: overlay_analysis
                .default_thresholds
                .or(base_analysis.default_thresholds),
        }),
        files: Some(FilesConfig {
            list: overlay_files.list.or(base_files.list),
            summary: overlay_files.summary.or(base_files.summary),
        }),
        log: Some(LogConfig {
            filter: overlay_log.filter.or(base_log.filter),
        }),
    }
}
