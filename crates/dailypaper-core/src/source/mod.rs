//! Data sources the loader tries in order.

pub mod dir;
pub mod http;
#[cfg(test)]
pub mod mock;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

pub use dir::DirSource;
pub use http::HttpSource;

/// Why a single source could not deliver a resource.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A location that serves the static JSON resources.
///
/// All sources share the same schema, so the loader can substitute one for
/// another.
pub trait DataSource: Send + Sync {
    /// Short label used in logs and error reports.
    fn name(&self) -> &str;

    /// Fetch the raw body of `resource` (e.g. `available_dates.json`).
    fn fetch<'a>(
        &'a self,
        resource: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>>;
}
