//! Lazy traversal of paginated search results.
//!
//! [`TitleStream`] yields the titles of a query page by page. It requests a
//! page only when the titles of the previous one are used up, and it follows
//! the `next` link the server puts into each page instead of computing page
//! numbers itself.

use crate::client::Hydra;
use crate::response::{SearchResponse, TitleResponse};
use crate::transport::Fetch;
use std::collections::HashSet;
use std::iter::FusedIterator;
use std::vec;
use tracing::{debug, warn};

#[derive(Debug)]
enum Cursor {
    /// Nothing fetched yet; the result size is probed on first use.
    Start(String),
    /// Link to the next page.
    Page(String),
    Done,
}

/// Iterator over the titles of a query, across all result pages.
///
/// Created by [`Hydra::stream`]. The traversal ends, without error, when a
/// page has no `next` link, when a page request fails, or when a `next` link
/// points back to a page it has already fetched. Each stream owns its position, so
/// separate streams over the same query do not interfere.
#[derive(Debug)]
pub struct TitleStream<'c, F> {
    client: &'c Hydra<F>,
    query: String,
    cursor: Cursor,
    buffered: vec::IntoIter<TitleResponse>,
    visited: HashSet<String>,
}

impl<'c, F: Fetch> TitleStream<'c, F> {
    pub(crate) fn new(client: &'c Hydra<F>, query: &str, first_page: String) -> Self {
        TitleStream {
            client,
            query: query.to_string(),
            cursor: Cursor::Start(first_page),
            buffered: Vec::new().into_iter(),
            visited: HashSet::new(),
        }
    }

    /// Number of result pages requested so far.
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.visited.len()
    }

    /// The query being traversed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    fn load_page(&mut self, url: String) {
        self.visited.insert(url.clone());
        let Some(doc) = self.client.fetch(&url) else {
            debug!(url = %url, query = %self.query, "page unavailable, ending stream");
            return;
        };

        let page = SearchResponse::new(doc);
        match page.view_next() {
            Some(next) if self.visited.contains(next) => {
                warn!(url = %url, next, "next link points to a page already fetched, ending stream");
            }
            Some(next) => self.cursor = Cursor::Page(next.to_string()),
            None => debug!(url = %url, "last page reached"),
        }
        self.buffered = page.into_titles().unwrap_or_default().into_iter();
    }
}

impl<F: Fetch> Iterator for TitleStream<'_, F> {
    type Item = TitleResponse;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(title) = self.buffered.next() {
                return Some(title);
            }

            let url = match std::mem::replace(&mut self.cursor, Cursor::Done) {
                Cursor::Start(url) => {
                    if self.client.total(&self.query) == 0 {
                        debug!(query = %self.query, "empty result set");
                        return None;
                    }
                    url
                }
                Cursor::Page(url) => url,
                Cursor::Done => return None,
            };
            self.load_page(url);
        }
    }
}

impl<F: Fetch> FusedIterator for TitleStream<'_, F> {}
