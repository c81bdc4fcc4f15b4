use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use super::{DataSource, SourceError};

/// Reads resources from a local directory (`data/` by default).
pub struct DirSource {
    name: String,
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            name: format!("local {}", root.display()),
            root,
        }
    }
}

impl DataSource for DirSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch<'a>(
        &'a self,
        resource: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.root.join(resource.trim_start_matches('/'));
            Ok(tokio::fs::read_to_string(&path).await?)
        })
    }
}
