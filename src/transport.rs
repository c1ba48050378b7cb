//! Fetching JSON documents over HTTP.
//!
//! The client only needs one operation from its transport: fetch the JSON
//! document at a URL, or report that there is none. [`Fetch`] is that seam;
//! [`HttpTransport`] is the default implementation on a blocking `ureq` agent.
//! Failures are logged here and never reach the caller as errors.

use crate::config::HydraConfig;
use crate::envelope::is_empty_document;
use crate::error::{HydraError, Result};
use serde_json::Value;
use std::fmt;
use tracing::{debug, error};

/// Source of decoded JSON documents.
///
/// Implementations return `None` on any network, HTTP status or decode
/// failure; they must not panic.
pub trait Fetch {
    /// Fetch and decode the document at `url`.
    fn fetch(&self, url: &str) -> Option<Value>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &str) -> Option<Value> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP transport.
///
/// Only status 200 counts as success. Bodies that decode to `null`, `{}` or
/// `[]` are treated as missing documents.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    headers: Vec<(String, String)>,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    #[must_use]
    pub fn new(config: &HydraConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        HttpTransport {
            agent: builder.build(),
            headers: config.request_headers(),
        }
    }

    /// Fetch and decode the document at `url`, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns [`HydraError::Transport`] if the request cannot be sent,
    /// [`HydraError::Status`] for any status other than 200,
    /// [`HydraError::IoError`] or [`HydraError::Json`] if the body cannot be
    /// read or decoded, and [`HydraError::EmptyResponse`] for empty documents.
    pub fn try_fetch(&self, url: &str) -> Result<Value> {
        let mut request = self
            .agent
            .get(url)
            .set("Accept", "application/ld+json, application/json");
        for (name, value) in &self.headers {
            request = request.set(name, value);
        }

        let response = match request.call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                return Err(HydraError::Status {
                    url: url.to_string(),
                    code,
                })
            }
            Err(ureq::Error::Transport(err)) => return Err(HydraError::Transport(err.to_string())),
        };

        if response.status() != 200 {
            return Err(HydraError::Status {
                url: url.to_string(),
                code: response.status(),
            });
        }

        let body = response.into_string()?;
        let value: Value = serde_json::from_str(&body)?;
        if is_empty_document(&value) {
            return Err(HydraError::EmptyResponse(url.to_string()));
        }
        Ok(value)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(&HydraConfig::default())
    }
}

impl Fetch for HttpTransport {
    fn fetch(&self, url: &str) -> Option<Value> {
        debug!(url, "fetching document");
        match self.try_fetch(url) {
            Ok(value) => Some(value),
            Err(err) => {
                error!(url, error = %err, "request failed");
                None
            }
        }
    }
}
