//! Configuration loading shared by Kinship binaries.
//!
//! A config type implements [`ConfigManager`] and gets file discovery,
//! TOML loading, environment overrides, and env-var export for free. The
//! config file is looked up in this order:
//!
//! 1. an explicit path (e.g. `--config`)
//! 2. `<PREFIX>_CONFIG` in the environment
//! 3. `<config dir>/<project>/config.toml`
//!
//! A missing file at an implicit location yields defaults; a missing file
//! at an explicit location is an error.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Lookup function for environment variables, injectable for tests.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Behaviour shared by project config types.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory and env prefix.
    fn project_name() -> &'static str;

    /// Environment variable prefix, e.g. `KINSHIP`.
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace(['-', ' '], "_")
    }

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolves which config file would be used.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_path_with_env::<Self>(explicit, &|key: &str| std::env::var(key).ok())
    }

    /// Applies environment overrides on top of file values.
    fn apply_env_overrides(&mut self, _env: EnvLookup<'_>) -> Result<()> {
        Ok(())
    }

    /// Checks invariants after loading.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Loads config from the resolved file and the process environment.
    fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with_env(explicit, &|key: &str| std::env::var(key).ok())
    }

    /// Loads config using `env` for every environment lookup.
    fn load_with_env(explicit: Option<&str>, env: EnvLookup<'_>) -> Result<Self> {
        let mut config = match resolve_path_with_env::<Self>(explicit, env) {
            Some(path) if path.exists() => load_file::<Self>(&path)?,
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            _ => {
                log::debug!("No config file found; using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flattens the config into `PREFIX_SECTION_KEY=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::env_prefix(), &value, &mut vars);
        Ok(vars)
    }
}

fn resolve_path_with_env<C: ConfigManager>(
    explicit: Option<&str>,
    env: EnvLookup<'_>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = env(&format!("{}_CONFIG", C::env_prefix())) {
        return Some(PathBuf::from(path));
    }
    C::default_config_path()
}

/// Reads and parses a TOML config file.
pub fn load_file<C: DeserializeOwned>(path: &Path) -> Result<C> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    log::debug!("Loading config from {}", path.display());
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let key = format!("{prefix}_{}", key.to_uppercase().replace('-', "_"));
                flatten_env(&key, child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
