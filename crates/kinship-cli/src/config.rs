//! Kinship configuration.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [source]
//! url = "https://mate-academy.github.io/react_people-table/api/people.json"
//! # path = "/srv/kinship/people.json"   # takes precedence over url
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! Environment overrides: `KINSHIP_HOST`, `KINSHIP_PORT`,
//! `KINSHIP_SOURCE_URL`, `KINSHIP_SOURCE_PATH`, `KINSHIP_LOG`.

use std::path::PathBuf;
use std::sync::Arc;

use kinship_client::{DEFAULT_PEOPLE_URL, FilePeopleSource, HttpPeopleSource, PeopleSource};
use kinship_core::config::EnvLookup;
use kinship_core::{ConfigManager, Error};
use kinship_web::ServerConfig;
use serde::{Deserialize, Serialize};

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinshipConfig {
    /// Listen address
    pub server: ServerSection,
    /// Where people records come from
    pub source: SourceSection,
    /// Log filter
    pub logging: LoggingSection,
}

/// `[server]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            host: defaults.host,
            port: defaults.port,
        }
    }
}

/// `[source]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Dataset URL, fetched once per page mount
    pub url: String,
    /// Local dataset; used instead of `url` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_PEOPLE_URL.to_string(),
            path: None,
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing-subscriber` filter directive; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl KinshipConfig {
    /// Listen address for the web server.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.server.host.clone(),
            port: self.server.port,
        }
    }

    /// Builds the configured record source.
    pub fn people_source(&self) -> kinship_client::Result<Arc<dyn PeopleSource>> {
        let source: Arc<dyn PeopleSource> = match &self.source.path {
            Some(path) => Arc::new(FilePeopleSource::new(path)),
            None => Arc::new(HttpPeopleSource::new(&self.source.url)?),
        };
        Ok(source)
    }
}

impl ConfigManager for KinshipConfig {
    fn project_name() -> &'static str {
        "kinship"
    }

    fn apply_env_overrides(&mut self, env: EnvLookup<'_>) -> kinship_core::Result<()> {
        if let Some(host) = env("KINSHIP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("KINSHIP_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("KINSHIP_PORT is not a port: '{port}'")))?;
        }
        if let Some(url) = env("KINSHIP_SOURCE_URL") {
            self.source.url = url;
        }
        if let Some(path) = env("KINSHIP_SOURCE_PATH") {
            self.source.path = Some(PathBuf::from(path));
        }
        if let Some(filter) = env("KINSHIP_LOG") {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> kinship_core::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("server.host must not be empty"));
        }
        if self.source.path.is_none() && self.source.url.trim().is_empty() {
            return Err(Error::config("either source.url or source.path must be set"));
        }
        Ok(())
    }
}
