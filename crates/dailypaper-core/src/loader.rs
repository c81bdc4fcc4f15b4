//! Ordered-fallback loading of the date index and per-date paper files.
//!
//! Each configured [`DataSource`] is tried in turn. The first one that
//! returns a body wins and its body is parsed; a parse failure is reported
//! as-is and does not fall through to the next source.

use serde::de::DeserializeOwned;

use crate::dates::{self, DATES_RESOURCE, DateList};
use crate::paper::{self, PaperSet};
use crate::source::DataSource;
use crate::{LoadError, SourceAttempt};

pub struct Loader {
    sources: Vec<Box<dyn DataSource>>,
}

impl Loader {
    pub fn new(sources: Vec<Box<dyn DataSource>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetch the raw body of `resource` from the first source that has it.
    pub async fn fetch_body(&self, resource: &str) -> Result<String, LoadError> {
        if self.sources.is_empty() {
            return Err(LoadError::NoSources);
        }

        let mut attempts = Vec::new();
        for source in &self.sources {
            match source.fetch(resource).await {
                Ok(body) => {
                    if !attempts.is_empty() {
                        tracing::warn!(
                            resource,
                            source = source.name(),
                            failed = attempts.len(),
                            "served from fallback source"
                        );
                    }
                    tracing::debug!(resource, source = source.name(), bytes = body.len(), "fetched");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::debug!(resource, source = source.name(), error = %e, "source failed");
                    attempts.push(SourceAttempt {
                        source: source.name().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Err(LoadError::Network {
            resource: resource.to_string(),
            attempts,
        })
    }

    /// Fetch `resource` and deserialize it as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let body = self.fetch_body(resource).await?;
        serde_json::from_str(&body).map_err(|source| LoadError::Parse {
            resource: resource.to_string(),
            source,
        })
    }

    /// Load `available_dates.json`.
    pub async fn fetch_dates(&self) -> Result<DateList, LoadError> {
        let raw: Vec<String> = self.fetch_json(DATES_RESOURCE).await?;
        let dates = DateList::from_raw(raw);
        tracing::info!(count = dates.len(), "loaded date index");
        Ok(dates)
    }

    /// Load the paper list for `date`.
    pub async fn fetch_papers(&self, date: &str) -> Result<PaperSet, LoadError> {
        let resource = dates::papers_resource(date)?;
        let body = self.fetch_body(&resource).await?;
        let set = paper::parse_papers(&body).map_err(|source| LoadError::Parse {
            resource: resource.clone(),
            source,
        })?;
        tracing::info!(date, papers = set.len(), skipped = set.skipped, "loaded papers");
        Ok(set)
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("sources", &self.source_names())
            .finish()
    }
}
