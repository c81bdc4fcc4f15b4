//! In-memory source for loader and session tests.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{DataSource, SourceError};

/// What [`MockSource`] answers for a resource.
#[derive(Clone, Debug)]
pub enum MockResponse {
    Body(String),
    Status(u16),
    Missing,
}

/// Serves canned bodies by resource name; unknown resources are
/// [`MockResponse::Missing`].
pub struct MockSource {
    name: &'static str,
    responses: HashMap<String, MockResponse>,
    call_count: AtomicUsize,
}

impl MockSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            responses: HashMap::new(),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, resource: &str, response: MockResponse) -> Self {
        self.responses.insert(resource.to_string(), response);
        self
    }

    pub fn with_body(self, resource: &str, body: &str) -> Self {
        self.with(resource, MockResponse::Body(body.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl DataSource for MockSource {
    fn name(&self) -> &str {
        self.name
    }

    fn fetch<'a>(
        &'a self,
        resource: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let response = self
            .responses
            .get(resource)
            .cloned()
            .unwrap_or(MockResponse::Missing);

        Box::pin(async move {
            match response {
                MockResponse::Body(body) => Ok(body),
                MockResponse::Status(code) => Err(SourceError::Status(
                    reqwest::StatusCode::from_u16(code).unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                )),
                MockResponse::Missing => Err(SourceError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{resource} not found"),
                ))),
            }
        })
    }
}
