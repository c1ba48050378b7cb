//! Configuration options for the Hydra client.
//!
//! This module provides the [`HydraConfig`] struct which controls the API
//! endpoints the client talks to and how HTTP requests are issued.

use crate::error::{HydraError, Result};
use std::time::Duration;
use url::Url;

/// Default endpoint for title records and searches.
pub const DEFAULT_BASE_URL: &str = "https://zeitschriftendatenbank.de/api/tit";

/// Default location of the JSON-LD context document.
pub const DEFAULT_CONTEXT_URL: &str = "https://zeitschriftendatenbank.de/api/context/zdb.jsonld";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Hydra client.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zdb_hydra::HydraConfig;
///
/// // Default configuration (public ZDB endpoints)
/// let config = HydraConfig::default();
/// assert!(config.validate().is_ok());
///
/// // Custom configuration
/// let config = HydraConfig::new()
///     .with_base_url("http://localhost:8080/api/tit")
///     .with_timeout(Some(Duration::from_secs(5)))
///     .with_header("X-Trace", "1");
/// assert_eq!(config.base_url, "http://localhost:8080/api/tit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydraConfig {
    /// Endpoint for title lookups (`<base>/<id>.jsonld`) and searches
    /// (`<base>.jsonld?q=...`).
    pub base_url: String,

    /// URL of the JSON-LD context document.
    pub context_url: String,

    /// `User-Agent` header sent unless `headers` already sets one.
    pub user_agent: String,

    /// Overall timeout per request. `None` disables the timeout.
    pub timeout: Option<Duration>,

    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
}

impl Default for HydraConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            context_url: DEFAULT_CONTEXT_URL.to_string(),
            user_agent: format!("zdb-hydra {}", env!("CARGO_PKG_VERSION")),
            timeout: Some(DEFAULT_TIMEOUT),
            headers: Vec::new(),
        }
    }
}

impl HydraConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title/search endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the context document URL.
    #[must_use]
    pub fn with_context_url(mut self, url: impl Into<String>) -> Self {
        self.context_url = url.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Headers to send with each request, including the user agent.
    ///
    /// The configured `user_agent` is appended only if no header named
    /// `User-Agent` (in any case) is present.
    #[must_use]
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        if !headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("user-agent"))
        {
            headers.push(("User-Agent".to_string(), self.user_agent.clone()));
        }
        headers
    }

    /// The base URL without trailing slashes.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that both endpoints are valid absolute URLs.
    ///
    /// # Errors
    ///
    /// Returns [`HydraError::InvalidUrl`] for the first URL that fails to parse.
    pub fn validate(&self) -> Result<()> {
        for url in [&self.base_url, &self.context_url] {
            Url::parse(url).map_err(|err| HydraError::InvalidUrl {
                url: url.clone(),
                reason: err.to_string(),
            })?;
        }
        Ok(())
    }
}
