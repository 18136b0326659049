//! Base-address configuration: RON file, then environment, then CLI flag.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use invite_logging::{invite_debug, invite_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const CONFIG_FILENAME: &str = ".invite_config.ron";
pub const BASE_URL_ENV: &str = "BASE_UNDANGAN_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Invitation page the guest name is appended to. Empty disables generation.
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("base url {0:?} is not an absolute http(s) address")]
    InvalidBaseUrl(String),
}

/// Resolves the configuration.
///
/// An explicit `config_path` must exist; the default file is optional.
/// Later sources win: file, then `env_base_url`, then `cli_base_url`.
pub fn load_config(
    config_path: Option<&Path>,
    env_base_url: Option<String>,
    cli_base_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = PathBuf::from(CONFIG_FILENAME);
            if default_path.exists() {
                read_config(&default_path)?
            } else {
                invite_debug!("no {} in working directory", CONFIG_FILENAME);
                AppConfig::default()
            }
        }
    };

    if let Some(base_url) = env_base_url {
        config.base_url = base_url;
    }
    if let Some(base_url) = cli_base_url {
        config.base_url = base_url;
    }
    config.base_url = config.base_url.trim().to_string();

    validate_base_url(&config.base_url)?;
    if config.base_url.is_empty() {
        invite_info!("no base url configured; link generation is disabled");
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    invite_info!("loaded config from {:?}", path);
    Ok(config)
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    if base_url.is_empty() {
        return Ok(());
    }
    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ConfigError::InvalidBaseUrl(base_url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("invite.ron");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_base_url_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"(base_url: "https://example.org/invite")"#);

        let config = load_config(Some(&path), None, None).unwrap();
        assert_eq!(config.base_url, "https://example.org/invite");
    }

    #[test]
    fn env_then_cli_override_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"(base_url: "https://file.example/")"#);

        let config =
            load_config(Some(&path), Some("https://env.example/".to_string()), None).unwrap();
        assert_eq!(config.base_url, "https://env.example/");

        let config = load_config(
            Some(&path),
            Some("https://env.example/".to_string()),
            Some(" https://cli.example/ ".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://cli.example/");
    }

    #[test]
    fn empty_file_leaves_generation_disabled() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "()");

        let config = load_config(Some(&path), None, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_relative_or_non_http_base() {
        for bad in ["inv.example/undangan", "mailto:someone@example.org", "ftp://x.example/"] {
            let err = load_config(None, None, Some(bad.to_string())).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBaseUrl(_)), "{bad}");
        }
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("nope.ron")), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "(base_url: 42)");
        let err = load_config(Some(&path), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
