use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::caption_normalizer::DEFAULT_WRAP_WIDTH;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Target maximum chunk length in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters shared between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Line width used when reflowing normalized transcripts
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Caption language code (ISO)
    #[serde(default = "default_language")]
    pub language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Equivalent log crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_chunk_size() -> usize {
    1000
}

fn default_overlap() -> usize {
    100
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_language() -> String {
    "en".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(anyhow!("chunk_size must be greater than 0"));
        }
        if self.overlap >= self.chunk_size {
            return Err(anyhow!(
                "overlap ({}) must be less than chunk_size ({})",
                self.overlap,
                self.chunk_size
            ));
        }
        if self.wrap_width == 0 {
            return Err(anyhow!("wrap_width must be greater than 0"));
        }
        if self.language.trim().is_empty() {
            return Err(anyhow!("language must not be empty"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            wrap_width: default_wrap_width(),
            language: default_language(),
            log_level: LogLevel::default(),
        }
    }
}
