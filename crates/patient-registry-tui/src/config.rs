//! Configuration: defaults, then `config.toml`, then environment, then flags.

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the database path
pub const DATABASE_ENV: &str = "PATIENT_REGISTRY_DB";

const APP_DIR: &str = "patient-registry";

/// Command-line flags
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "patient-registry", version, about = "Manage patient records in a local database")]
pub struct Cli {
    /// Database file (created if missing)
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Config file (default: <config dir>/patient-registry/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start in fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Debug logging (unless RUST_LOG is set)
    #[arg(long)]
    pub debug: bool,
}

/// Resolved settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// SQLite file holding the patients table
    pub database_path: PathBuf,

    /// Log file; defaults to the platform data dir
    pub log_path: Option<PathBuf>,

    pub start_fullscreen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.db"),
            log_path: None,
            start_fullscreen: false,
        }
    }
}

impl Config {
    /// Load settings for this run.
    ///
    /// An explicit `--config` file must exist; the default one is optional.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(env::var(DATABASE_ENV).ok(), cli);
        Ok(config)
    }

    /// Get default config file path: <config dir>/patient-registry/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Environment beats the file; flags beat both.
    pub fn apply_overrides(&mut self, env_database: Option<String>, cli: &Cli) {
        if let Some(db) = env_database.filter(|db| !db.trim().is_empty()) {
            self.database_path = PathBuf::from(db);
        }
        if let Some(db) = &cli.database {
            self.database_path = db.clone();
        }
        if cli.fullscreen {
            self.start_fullscreen = true;
        }
    }

    /// Where logs go: configured path, else the platform data dir, else the working dir.
    pub fn log_file(&self) -> PathBuf {
        self.log_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("patient-registry.log")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path, PathBuf::from("database.db"));
        assert!(!config.start_fullscreen);
        assert!(config.log_file().ends_with("patient-registry.log"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("start_fullscreen = true\n").unwrap();
        assert!(config.start_fullscreen);
        assert_eq!(config.database_path, PathBuf::from("database.db"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(Config::from_toml("database_path = [").is_err());
    }

    #[test]
    fn test_override_precedence() {
        let mut config = Config::from_toml("database_path = \"/from/file.db\"").unwrap();

        config.apply_overrides(Some("/from/env.db".into()), &Cli::default());
        assert_eq!(config.database_path, PathBuf::from("/from/env.db"));

        let cli = Cli {
            database: Some(PathBuf::from("/from/flag.db")),
            fullscreen: true,
            ..Cli::default()
        };
        config.apply_overrides(Some("/from/env.db".into()), &cli);
        assert_eq!(config.database_path, PathBuf::from("/from/flag.db"));
        assert!(config.start_fullscreen);
    }

    #[test]
    fn test_blank_env_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some("  ".into()), &Cli::default());
        assert_eq!(config.database_path, PathBuf::from("database.db"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "database_path = \"clinic.db\"\nlog_path = \"clinic.log\"\n").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("clinic.db"));
        assert_eq!(config.log_file(), PathBuf::from("clinic.log"));

        assert!(Config::load_file(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["patient-registry", "--database", "x.db", "--debug"]);
        assert_eq!(cli.database, Some(PathBuf::from("x.db")));
        assert!(cli.debug);
        assert!(!cli.fullscreen);
    }
}
