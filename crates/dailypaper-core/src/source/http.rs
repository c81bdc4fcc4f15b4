use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::{DataSource, SourceError};

/// Fetches resources with `GET <base_url>/<resource>`.
pub struct HttpSource {
    name: String,
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: &str, client: reqwest::Client, timeout: Duration) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            name: format!("remote {base_url}"),
            base_url,
            client,
            timeout,
        }
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource.trim_start_matches('/'))
    }
}

impl DataSource for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch<'a>(
        &'a self,
        resource: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.url_for(resource);
            let resp = self
                .client
                .get(&url)
                .timeout(self.timeout)
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(SourceError::Status(resp.status()));
            }

            Ok(resp.text().await?)
        })
    }
}
