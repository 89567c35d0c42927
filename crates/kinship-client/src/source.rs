//! People record sources.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kinship_core::Person;

use crate::{Error, Result};

/// Public people dataset used when no source is configured.
pub const DEFAULT_PEOPLE_URL: &str =
    "https://mate-academy.github.io/react_people-table/api/people.json";

/// A read-only supplier of flat person records.
///
/// Each call is one fetch. Implementations do not retry and do not cache.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// Fetches every record in source order.
    async fn fetch_people(&self) -> Result<Vec<Person>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

fn decode(bytes: &[u8]) -> Result<Vec<Person>> {
    Ok(serde_json::from_slice(bytes)?)
}

// ============================================================================
// HTTP
// ============================================================================

/// Fetches the dataset with one HTTP GET of a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpPeopleSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpPeopleSource {
    /// Creates a source for `url` with a default client.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a source using an existing client.
    pub fn with_client(client: reqwest::Client, url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(url).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { client, url })
    }

    /// The URL fetched on every call.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn fetch_people(&self) -> Result<Vec<Person>> {
        tracing::debug!(url = %self.url, "Fetching people");

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let people = decode(&body)?;
        tracing::debug!(count = people.len(), "Fetched people");
        Ok(people)
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}

// ============================================================================
// File
// ============================================================================

/// Reads the dataset from a local JSON file.
#[derive(Debug, Clone)]
pub struct FilePeopleSource {
    path: PathBuf,
}

impl FilePeopleSource {
    /// Creates a source for `path`. The file is read on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PeopleSource for FilePeopleSource {
    async fn fetch_people(&self) -> Result<Vec<Person>> {
        tracing::debug!(path = %self.path.display(), "Reading people");
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        decode(&bytes)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path().display())
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Serves fixed records, or fails every fetch.
///
/// Counts fetches so callers can check how often a source was hit.
#[derive(Debug)]
pub struct StaticPeopleSource {
    outcome: std::result::Result<Vec<Person>, String>,
    fetches: AtomicUsize,
}

impl StaticPeopleSource {
    /// A source returning `people` on every fetch.
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            outcome: Ok(people),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for StaticPeopleSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PeopleSource for StaticPeopleSource {
    async fn fetch_people(&self) -> Result<Vec<Person>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(people) => Ok(people.clone()),
            Err(message) => Err(Error::Unavailable(message.clone())),
        }
    }

    fn describe(&self) -> String {
        match &self.outcome {
            Ok(people) => format!("memory ({} records)", people.len()),
            Err(_) => "memory (failing)".to_string(),
        }
    }
}
