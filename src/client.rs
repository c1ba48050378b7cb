//! Client for the Hydra JSON-LD API of the German Union Catalogue of Serials.
//!
//! See <https://zeitschriftendatenbank.de/services/schnittstellen/json-api>
//! for the interface and
//! <https://zeitschriftendatenbank.de/services/schnittstellen/hilfe-zur-suche>
//! for the query syntax.
//!
//! # Examples
//!
//! ```no_run
//! use zdb_hydra::{Hydra, PicaHelpers};
//!
//! let hydra = Hydra::new();
//!
//! if let Some(title) = hydra.title("2736054-4") {
//!     println!("{:?}", title.title());
//! }
//!
//! for title in hydra.stream("tit=zeit", 100, 1) {
//!     if let Some(issn) = title.pica().and_then(|p| p.issn_l()) {
//!         println!("{issn}");
//!     }
//! }
//! ```

use crate::config::HydraConfig;
use crate::error::Result;
use crate::pica::PicaRecord;
use crate::response::{SearchResponse, TitleResponse};
use crate::stream::TitleStream;
use crate::transport::{Fetch, HttpTransport};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::form_urlencoded;

/// Default page size of [`Hydra::search`].
pub const DEFAULT_SEARCH_SIZE: usize = 10;

/// Default page size of [`Hydra::stream`] and [`Hydra::collect`].
pub const DEFAULT_STREAM_SIZE: usize = 100;

/// Client for title lookups and searches.
///
/// Every operation degrades to "no result" on failure; the reasons are
/// logged by the transport.
#[derive(Debug, Clone)]
pub struct Hydra<F = HttpTransport> {
    config: HydraConfig,
    transport: F,
}

impl Hydra<HttpTransport> {
    /// Create a client for the public ZDB endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HydraConfig::default())
    }

    /// Create an HTTP client with a custom configuration.
    ///
    /// An invalid endpoint URL is logged at `warn` level; the client is still
    /// built and its requests will fail. Use [`Hydra::try_with_config`] to
    /// reject such a configuration up front.
    #[must_use]
    pub fn with_config(config: HydraConfig) -> Self {
        if let Err(err) = config.validate() {
            warn!(error = %err, "invalid client configuration");
        }
        let transport = HttpTransport::new(&config);
        Hydra { config, transport }
    }

    /// Create an HTTP client, rejecting a configuration with invalid URLs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HydraError::InvalidUrl`] if the base or context URL does
    /// not parse.
    pub fn try_with_config(config: HydraConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config);
        Ok(Hydra { config, transport })
    }
}

impl Default for Hydra<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> Hydra<F> {
    /// Create a client on top of any [`Fetch`] implementation.
    #[must_use]
    pub fn with_transport(config: HydraConfig, transport: F) -> Self {
        Hydra { config, transport }
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &HydraConfig {
        &self.config
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &F {
        &self.transport
    }

    pub(crate) fn fetch(&self, url: &str) -> Option<Value> {
        debug!(url, "requesting");
        self.transport.fetch(url)
    }

    /// Fetch the JSON-LD context document.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        self.fetch(&self.config.context_url)
    }

    /// URL of a title record: `<base>/<id>.jsonld`.
    #[must_use]
    pub fn title_url(&self, id: &str) -> String {
        format!("{}/{}.jsonld", self.config.base(), id)
    }

    /// Fetch a title record by ZDB-ID.
    ///
    /// A response without `data` means the title does not exist and yields
    /// `None`.
    #[must_use]
    pub fn title(&self, id: &str) -> Option<TitleResponse> {
        let response = TitleResponse::new(self.fetch(&self.title_url(id))?);
        if response.has_data() {
            Some(response)
        } else {
            info!(id, "title not found");
            None
        }
    }

    /// Fetch only the PICA+ record of a title.
    #[must_use]
    pub fn title_pica(&self, id: &str) -> Option<PicaRecord<'static>> {
        self.title(id)?.into_pica()
    }

    /// URL of one search page: `<base>.jsonld?q=<query>&size=<size>&page=<page>`.
    ///
    /// The query is form-encoded.
    #[must_use]
    pub fn address(&self, query: &str, size: usize, page: usize) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!(
            "{}.jsonld?q={}&size={}&page={}",
            self.config.base(),
            encoded,
            size,
            page
        )
    }

    /// Size of the result set of `query`, or 0 if the probe request fails.
    ///
    /// Issues a one-item request for the first page.
    #[must_use]
    pub fn total(&self, query: &str) -> u64 {
        self.fetch(&self.address(query, 1, 1))
            .map_or(0, |doc| SearchResponse::new(doc).total_items())
    }

    /// Fetch one search page.
    #[must_use]
    pub fn search_page(&self, query: &str, size: usize, page: usize) -> Option<SearchResponse> {
        self.fetch(&self.address(query, size, page))
            .map(SearchResponse::new)
    }

    /// Titles on one search page.
    ///
    /// Returns `None` when the request fails or the page has no members.
    #[must_use]
    pub fn search(&self, query: &str, size: usize, page: usize) -> Option<Vec<TitleResponse>> {
        self.search_page(query, size, page)?
            .into_titles()
            .filter(|titles| !titles.is_empty())
    }

    /// Lazily walk every page of a query, starting at `page`.
    ///
    /// Pages are fetched on demand by following each page's `next` link.
    /// The stream ends silently when a page has no `next` link or a page
    /// request fails, so a short result can also mean a failed request.
    #[must_use]
    pub fn stream(&self, query: &str, size: usize, page: usize) -> TitleStream<'_, F> {
        TitleStream::new(self, query, self.address(query, size, page))
    }

    /// Collect every title of a query, starting at `page`.
    ///
    /// Yields the same titles in the same order as draining [`Hydra::stream`].
    #[must_use]
    pub fn collect(&self, query: &str, size: usize, page: usize) -> Vec<TitleResponse> {
        self.stream(query, size, page).collect()
    }
}
