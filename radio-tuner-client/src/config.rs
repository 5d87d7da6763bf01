//! Configuration loading for the tuner client.
//!
//! Settings come from `RadioTuner.ini` in the current directory. When no INI
//! file is found (or it has no `[Logging]` section) the client falls back to
//! `RADIO_TUNER_*` environment variables and then to defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, error, info, LevelFilter};

/// Name of the INI file searched in the current directory.
pub const INI_FILE_NAME: &str = "RadioTuner.ini";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    pub level: LevelFilter,
    /// Append log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub logging: LoggingConfig,
}

/// Load configuration.
///
/// Searches for configuration in the following order:
/// 1. RadioTuner.ini in the current directory
/// 2. Environment variables (RADIO_TUNER_*)
/// 3. Default values
pub fn load_config() -> ClientConfig {
    if let Some(ini_path) = find_ini_file() {
        info!("Loading configuration from {:?}", ini_path);
        if let Some(config) = load_from_ini(&ini_path) {
            return config;
        }
    }

    load_from_env()
}

/// Find the INI file in the current directory.
fn find_ini_file() -> Option<PathBuf> {
    let ini_path = std::env::current_dir().ok()?.join(INI_FILE_NAME);
    ini_path.exists().then_some(ini_path)
}

/// Simple INI section parser.
fn parse_ini(content: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current_section = String::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].trim().to_string();
            sections.entry(current_section.clone()).or_default();
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            sections
                .entry(current_section.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    sections
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

fn parse_file(value: Option<&str>) -> Option<PathBuf> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Load configuration from an INI file.
pub fn load_from_ini(path: &Path) -> Option<ClientConfig> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to read INI file: {}", e);
            return None;
        }
    };

    let sections = parse_ini(&content);
    let section = sections.get("Logging")?;

    let logging = LoggingConfig {
        level: parse_level(section.get("Level").map(String::as_str)),
        file: parse_file(section.get("File").map(String::as_str)),
    };

    debug!("Configuration loaded: level={}, file={:?}", logging.level, logging.file);

    Some(ClientConfig { logging })
}

/// Load configuration from environment variables.
fn load_from_env() -> ClientConfig {
    let level = std::env::var("RADIO_TUNER_LOG_LEVEL").ok();
    let file = std::env::var("RADIO_TUNER_LOG_FILE").ok();

    let logging = LoggingConfig {
        level: parse_level(level.as_deref()),
        file: parse_file(file.as_deref()),
    };

    debug!("Using environment/default config: level={}, file={:?}", logging.level, logging.file);

    ClientConfig { logging }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_ini() {
        let content = r#"
; Comment
[Logging]
Level = debug
File = /var/log/radio.log

# Another comment
[Other]
Key = Value
"#;
        let sections = parse_ini(content);

        let logging = sections.get("Logging").unwrap();
        assert_eq!(logging.get("Level").unwrap(), "debug");
        assert_eq!(logging.get("File").unwrap(), "/var/log/radio.log");
        assert_eq!(sections.get("Other").unwrap().get("Key").unwrap(), "Value");
    }

    #[test]
    fn test_parse_ini_keys_before_section() {
        let content = "Level = trace\n[Logging]\nLevel = warn\n";
        let sections = parse_ini(content);

        // Keys ahead of the first header land in the unnamed section.
        assert_eq!(sections.get("").unwrap().get("Level").unwrap(), "trace");
        assert_eq!(sections.get("Logging").unwrap().get("Level").unwrap(), "warn");
    }

    #[test]
    fn test_load_from_ini_ignores_keys_before_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "File = stray.log\n[Logging]\nLevel = debug").unwrap();

        let config = load_from_ini(file.path()).unwrap();
        assert_eq!(config.logging.level, LevelFilter::Debug);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("warn")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_load_from_ini() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[Logging]\nLevel = error\nFile = tuner.log").unwrap();

        let config = load_from_ini(file.path()).unwrap();
        assert_eq!(config.logging.level, LevelFilter::Error);
        assert_eq!(config.logging.file, Some(PathBuf::from("tuner.log")));
    }

    #[test]
    fn test_load_from_ini_without_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[Server]\nAddress = 127.0.0.1").unwrap();

        assert!(load_from_ini(file.path()).is_none());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_ini(&dir.path().join(INI_FILE_NAME)).is_none());
    }

    #[test]
    fn test_empty_file_setting() {
        assert_eq!(parse_file(Some("  ")), None);
        assert_eq!(parse_file(Some("a.log")), Some(PathBuf::from("a.log")));
    }
}
