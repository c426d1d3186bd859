//! Configuration handling
use std::{
    ffi::OsStr,
    fs::{canonicalize, read_to_string},
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{cli::GiteaMigrateCli, errors::GiteaMigrateError, required_value, utils::get_password};

/// Configuration data
#[derive(Default, Clone, Debug)]
pub struct GiteaMigrateConfig {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: GiteaMigrateCli,
}

/// Values read from the configuration file
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ConfigData {
    /// Base URL of the Gitea instance
    pub url: Option<String>,

    /// Gitea username
    pub username: Option<String>,

    /// Gitea password
    pub password: Option<String>,

    /// Root directory of the organizations
    pub path: Option<PathBuf>,
}

/// Settings of one run, resolved once at startup
#[derive(Clone, Debug)]
pub struct Settings {
    /// Canonical root directory of the organizations
    pub source_path: PathBuf,

    /// Base URL of the Gitea instance
    pub base_url: Url,

    /// Basic-auth username
    pub username: String,

    /// Basic-auth password
    pub password: String,

    /// Dump requests and responses
    pub debug: bool,

    /// Only report what would be migrated
    pub dry_run: bool,
}

/// `Some` only for a non-empty value
pub(crate) fn present<T: AsRef<OsStr>>(value: &Option<T>) -> Option<&T> {
    value
        .as_ref()
        .filter(|v| !AsRef::<OsStr>::as_ref(*v).is_empty())
}

impl GiteaMigrateConfig {
    /// Create a new config from the CLI arguments and the config file
    ///
    /// The default config file is optional, an explicit one must exist.
    /// # Errors
    /// Error if the config file can't be read or parsed
    pub fn try_new(cli_args: GiteaMigrateCli) -> Result<Self, GiteaMigrateError> {
        let (config_path, explicit) = match cli_args.config.clone() {
            Some(p) => (p, true),
            None => (Self::get_config_path()?, false),
        };
        let config_data = if explicit || config_path.exists() {
            let contents = read_to_string(&config_path)
                .map_err(|e| GiteaMigrateError::new_with_source("Unable to open", e))?;
            toml::from_str(&contents)?
        } else {
            ConfigData::default()
        };
        Ok(GiteaMigrateConfig {
            config_path,
            config_data,
            cli_args,
        })
    }

    /// Get the path to the default config file
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, GiteaMigrateError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        Ok(home_dir
            .join(".config")
            .join(".gitea-migrate")
            .join("config.toml"))
    }

    /// Resolve the settings of the run
    /// # Errors
    /// Error if a required value is missing or invalid
    pub fn settings(&self) -> Result<Settings, GiteaMigrateError> {
        let path = required_value!(self, path, "path")?;
        let url = required_value!(self, url, "url")?;
        let username = required_value!(self, username, "username")?;
        let password = match required_value!(self, password, "password") {
            Ok(password) => password,
            Err(_) if self.cli_args.ask_password => {
                println!("Please enter the password of {username}:");
                get_password()?
            }
            Err(e) => return Err(e),
        };

        let source_path = canonicalize(&path).map_err(|e| {
            GiteaMigrateError::new_with_source(
                &format!("Unable to open {}", path.display()),
                e,
            )
        })?;
        if !source_path.is_dir() {
            return Err(format!("Not a directory: {}", source_path.display()).into());
        }
        let base_url = Url::parse(&url)?;

        Ok(Settings {
            source_path,
            base_url,
            username,
            password,
            debug: self.cli_args.debug,
            dry_run: self.cli_args.dry_run,
        })
    }
}
