/*!
 * Tests for application configuration
 */

use anyhow::Result;
use vttknow::app_config::{Config, LogLevel};
use crate::common;

/// Test the built-in defaults match the reference parameters
#[test]
fn test_config_default_shouldUseReferenceParameters() {
    let config = Config::default();
    assert_eq!(config.chunk_size, 1000);
    assert_eq!(config.overlap, 100);
    assert_eq!(config.wrap_width, 100);
    assert_eq!(config.language, "en");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test validation rejects the chunker contract violations
#[test]
fn test_config_validate_withBadChunkParams_shouldFail() {
    let mut config = Config::default();
    config.chunk_size = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.overlap = config.chunk_size;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.overlap = config.chunk_size + 50;
    assert!(config.validate().is_err());
}

/// Test validation rejects a zero wrap width and an empty language
#[test]
fn test_config_validate_withBadOutputParams_shouldFail() {
    let mut config = Config::default();
    config.wrap_width = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.language = "  ".to_string();
    assert!(config.validate().is_err());
}

/// Test loading a config file with partial content falls back to defaults
#[test]
fn test_config_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"chunk_size": 500, "log_level": "debug"}"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.chunk_size, 500);
    assert_eq!(config.overlap, 100);
    assert_eq!(config.wrap_width, 100);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test loading a config file with invalid parameters fails fast
#[test]
fn test_config_from_file_withInvalidParams_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"chunk_size": 100, "overlap": 100}"#,
    )?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}

/// Test log levels map onto the log crate's filters
#[test]
fn test_log_level_to_level_filter_shouldMapAllLevels() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
