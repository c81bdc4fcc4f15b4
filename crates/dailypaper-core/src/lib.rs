use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub mod categories;
pub mod config_file;
pub mod dates;
pub mod filter;
pub mod loader;
pub mod paper;
pub mod session;
pub mod source;
pub mod view;

// Re-export for convenience
pub use categories::{ALL_CATEGORIES, derive_categories};
pub use dates::DateList;
pub use filter::{FilterState, apply_filters};
pub use loader::Loader;
pub use paper::{Paper, PaperSet};
pub use session::{LoadPhase, LoadTicket, Session};
pub use view::{ListView, PaperCard, render};

/// Default remote location of the published JSON files.
pub const DEFAULT_REMOTE_BASE_URL: &str =
    "https://raw.githubusercontent.com/zhang-lecheng/daily-paper/data/";
/// Default local fallback directory.
pub const DEFAULT_LOCAL_DIR: &str = "data";

/// Environment overrides, applied over the config file and under CLI flags.
pub const ENV_REMOTE_URL: &str = "DAILYPAPER_REMOTE_URL";
pub const ENV_DATA_DIR: &str = "DAILYPAPER_DATA_DIR";

/// One source's failure while fetching a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAttempt {
    pub source: String,
    pub error: String,
}

impl std::fmt::Display for SourceAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not fetch {resource} from any source ({})", join_attempts(.attempts))]
    Network {
        resource: String,
        attempts: Vec<SourceAttempt>,
    },
    #[error("malformed {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no data sources configured")]
    NoSources,
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

fn join_attempts(attempts: &[SourceAttempt]) -> String {
    attempts
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Resolved loader configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote base URL tried first. `None` disables the remote source.
    pub remote_base_url: Option<String>,
    /// Local directory tried after the remote. `None` disables it.
    pub local_dir: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_base_url: Some(DEFAULT_REMOTE_BASE_URL.to_string()),
            local_dir: Some(PathBuf::from(DEFAULT_LOCAL_DIR)),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Apply the `[sources]` section of a config file over the defaults.
    pub fn from_file(file: &config_file::ConfigFile) -> Self {
        let mut config = Self::default();
        if let Some(sources) = &file.sources {
            if let Some(url) = &sources.remote_base_url {
                config.remote_base_url = Some(url.clone());
            }
            if sources.remote_enabled == Some(false) {
                config.remote_base_url = None;
            }
            if let Some(dir) = &sources.local_dir {
                config.local_dir = Some(PathBuf::from(dir));
            }
            if let Some(secs) = sources.timeout_secs {
                config.timeout_secs = secs;
            }
        }
        config
    }

    /// Apply `DAILYPAPER_REMOTE_URL` / `DAILYPAPER_DATA_DIR` through `lookup`
    /// (normally `std::env::var`). Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_REMOTE_URL).filter(|v| !v.is_empty()) {
            self.remote_base_url = Some(url);
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.local_dir = Some(PathBuf::from(dir));
        }
    }

    /// Build the loader: remote first, then the local directory.
    pub fn build_loader(&self) -> Result<Loader, LoadError> {
        let mut sources: Vec<Box<dyn source::DataSource>> = Vec::new();
        if let Some(url) = &self.remote_base_url {
            let client = reqwest::Client::builder()
                .user_agent(concat!("dailypaper/", env!("CARGO_PKG_VERSION")))
                .build()?;
            sources.push(Box::new(source::HttpSource::new(
                url,
                client,
                Duration::from_secs(self.timeout_secs.max(1)),
            )));
        }
        if let Some(dir) = &self.local_dir {
            sources.push(Box::new(source::DirSource::new(dir.clone())));
        }
        if sources.is_empty() {
            return Err(LoadError::NoSources);
        }
        Ok(Loader::new(sources))
    }
}
