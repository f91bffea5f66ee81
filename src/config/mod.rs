mod errors;

pub use errors::{ConfigError, ConfigResult};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::pager::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_MIN_QUERY_LEN, WINDOW_SIZE};
use crate::tui::PaginationStyle;

/// Roster size generated when no data file is configured
pub const DEFAULT_SAMPLE_SIZE: usize = 120;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Page buttons visible at once
    pub window_size: usize,

    /// Students per page
    pub items_per_page: usize,

    /// Minimum search length before the list is filtered
    pub min_query_len: usize,

    /// Pagination bar layout
    pub display_style: PaginationStyle,

    /// JSON roster to browse instead of the generated sample
    pub data_file: Option<PathBuf>,

    /// Number of generated students when no data file is set
    pub sample_size: usize,
}

/// Partial configuration as read from a file; missing keys keep earlier values
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    window_size: Option<usize>,
    items_per_page: Option<usize>,
    min_query_len: Option<usize>,
    display_style: Option<PaginationStyle>,
    data_file: Option<PathBuf>,
    sample_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            display_style: PaginationStyle::Window,
            data_file: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Config {
    /// Initialize configuration from defaults, environment and file
    pub async fn init(explicit_path: Option<&Path>) -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();
        config.load_from_env();

        let file_config = match explicit_path {
            Some(path) => Some(Self::read_file(path).await?),
            None => Self::load_from_file().await?,
        };
        if let Some(file_config) = file_config {
            config.merge_with(file_config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_usize = |key: &str| -> Option<usize> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring {}: not a number: {:?}", key, raw);
                    None
                }
            }
        };

        if let Some(size) = parse_usize("ROSTER_WINDOW_SIZE") {
            self.window_size = size;
        }
        if let Some(size) = parse_usize("ROSTER_PAGE_SIZE") {
            self.items_per_page = size;
        }
        if let Some(len) = parse_usize("ROSTER_MIN_QUERY_LEN") {
            self.min_query_len = len;
        }
        if let Some(size) = parse_usize("ROSTER_SAMPLE_SIZE") {
            self.sample_size = size;
        }

        if let Some(style) = lookup("ROSTER_STYLE") {
            match PaginationStyle::from_str(style.trim(), true) {
                Ok(style) => self.display_style = style,
                Err(_) => warn!("Ignoring ROSTER_STYLE: unknown style {:?}", style),
            }
        }

        if let Some(path) = lookup("ROSTER_DATA_FILE") {
            if !path.is_empty() {
                self.data_file = Some(PathBuf::from(path));
            }
        }
    }

    /// Find the first configuration file in the usual places
    async fn load_from_file() -> Result<Option<FileConfig>> {
        // 1. ./.roster.json
        // 2. ./roster.json
        // 3. $CONFIG_DIR/roster/roster.json
        let mut config_paths = vec![
            PathBuf::from("./.roster.json"),
            PathBuf::from("./roster.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("roster").join("roster.json"));
        }

        for path in config_paths {
            if path.exists() {
                return Self::read_file(&path).await.map(Some);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    async fn read_file(path: &Path) -> Result<FileConfig> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Merge file values over the current ones
    fn merge_with(&mut self, other: FileConfig) {
        if let Some(size) = other.window_size {
            self.window_size = size;
        }
        if let Some(size) = other.items_per_page {
            self.items_per_page = size;
        }
        if let Some(len) = other.min_query_len {
            self.min_query_len = len;
        }
        if let Some(style) = other.display_style {
            self.display_style = style;
        }
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if let Some(size) = other.sample_size {
            self.sample_size = size;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window_size == 0 {
            return Err(ConfigError::InvalidWindowSize(self.window_size));
        }
        if self.items_per_page == 0 {
            return Err(ConfigError::InvalidPageSize(self.items_per_page));
        }
        if self.min_query_len == 0 {
            return Err(ConfigError::InvalidMinQueryLength(self.min_query_len));
        }
        Ok(())
    }
}
