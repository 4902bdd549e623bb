//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader (directories aware)
//!
//! Loads the viewer settings as TOML, either from `./config.toml` in the
//! working directory or from the cross-platform config path provided by the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! Unlike most of the application state, configuration failures are fatal:
//! without a `data_dir` there is no store to open, so startup aborts before
//! the terminal is put into raw mode.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root data directory of the model installation. Required.
    pub data_dir: PathBuf,
}

/// Raw document shape before required-setting checks. Every key is optional
/// here so an absent setting is `ConfigInvalid`, not a parse error.
#[derive(Debug, Deserialize)]
struct RawConfig {
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Loads config from `./config.toml` or the XDG-compliant app config dir.
    ///
    /// A missing document is `ConfigMissing`; a document whose `data_dir` is
    /// absent or empty is `ConfigInvalid`. Both are fatal to startup.
    pub async fn load() -> Result<Self, AppError> {
        let path: PathBuf = Self::discover()?;

        info!("Loading config from {}", path.display());
        let text: String = TokioFs::read_to_string(&path)
            .await
            .map_err(|e| Self::read_error(path.clone(), e))?;

        Self::parse(&text)
    }

    /// Parse and validate one config document.
    fn parse(text: &str) -> Result<Self, AppError> {
        let raw: RawConfig = toml::from_str(text)?;

        let data_dir: PathBuf = raw.data_dir.ok_or_else(|| {
            AppError::ConfigInvalid("data_dir setting is required".to_string())
        })?;

        let cfg: Self = Self { data_dir };
        cfg.validate()?;

        Ok(cfg)
    }

    /// Only a vanished document is `ConfigMissing`; anything else (e.g.
    /// permission denied) surfaces as the I/O error it is.
    fn read_error(path: PathBuf, err: std::io::Error) -> AppError {
        if err.kind() == ErrorKind::NotFound {
            AppError::ConfigMissing(path)
        } else {
            AppError::Io(err)
        }
    }

    /// The backing store lives at a fixed location under the data directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("databases").join("models.db")
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::ConfigInvalid(
                "data_dir must be a non-empty path".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the config document location: working directory first, then
    /// the canonical per-user path from `directories::ProjectDirs`.
    fn discover() -> Result<PathBuf, AppError> {
        let local: &Path = Path::new("config.toml");
        if local.exists() {
            return Ok(local.to_path_buf());
        }

        let canonical: PathBuf = Self::config_path()?;
        if canonical.exists() {
            Ok(canonical)
        } else {
            Err(AppError::ConfigMissing(canonical))
        }
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs: ProjectDirs = ProjectDirs::from("org", "modelview", "ModelView")
            .ok_or_else(|| {
                AppError::ConfigInvalid("could not determine config directory".to_string())
            })?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_data_dir() {
        let cfg: Config = Config::parse("data_dir = \"/mnt/hub/model_data\"").unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/mnt/hub/model_data"));
        assert_eq!(
            cfg.database_path(),
            PathBuf::from("/mnt/hub/model_data/databases/models.db")
        );
    }

    #[test]
    fn missing_data_dir_is_invalid() {
        let parsed: Result<Config, AppError> = Config::parse("");
        assert!(matches!(parsed, Err(AppError::ConfigInvalid(_))));
    }

    #[test]
    fn malformed_document_fails_parse() {
        let parsed: Result<Config, AppError> = Config::parse("data_dir = [1, 2]");
        assert!(matches!(parsed, Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn empty_data_dir_is_invalid() {
        let parsed: Result<Config, AppError> = Config::parse("data_dir = \"\"");
        assert!(matches!(parsed, Err(AppError::ConfigInvalid(_))));
    }

    #[test]
    fn vanished_document_reads_as_missing() {
        let path: PathBuf = PathBuf::from("/nowhere/config.toml");
        let err: AppError = Config::read_error(
            path.clone(),
            std::io::Error::new(ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, AppError::ConfigMissing(p) if p == path));
    }

    #[test]
    fn unreadable_document_surfaces_io_error() {
        let err: AppError = Config::read_error(
            PathBuf::from("/locked/config.toml"),
            std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, AppError::Io(_)));
    }
}
