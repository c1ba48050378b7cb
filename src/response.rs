//! Views over ZDB Hydra API responses.
//!
//! This module provides the read-only views returned by the client:
//! - [`TitleResponse`] — one title record (a search member or a direct fetch)
//! - [`SearchResponse`] — one page of search results
//! - [`ViewResponse`] — the pagination view of a search page
//!
//! Field descriptions follow the JSON API documentation at
//! <https://zeitschriftendatenbank.de/services/schnittstellen/json-api>.

use crate::envelope::{value_as_u64, Envelope};
use crate::envelope_str_accessors;
use crate::pica::PicaRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A title record.
///
/// Every title carries the keys `id` (URL of the record), `type` (list of
/// publication types), `seeAlso`/`sameAs` (RDF representations),
/// `identifier` (ZDB-ID), `medium`, `issn` (list of valid ISSNs), `title`,
/// `temporal` (publication history), `publisher` and `data`, the embedded
/// PICA+ record.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use zdb_hydra::{PicaHelpers, TitleResponse};
///
/// let title = TitleResponse::new(json!({
///     "identifier": "2736054-4",
///     "issn": ["0044-2070"],
///     "data": {"021A": [[{"a": "¬Die@ Zeit"}]]}
/// }));
///
/// assert_eq!(title.identifier(), Some("2736054-4"));
/// assert_eq!(title.issn(), Some(vec!["0044-2070"]));
/// assert_eq!(title.pica().and_then(|p| p.title()).as_deref(), Some("Die Zeit"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleResponse {
    raw: Value,
}

impl Envelope for TitleResponse {
    fn raw(&self) -> &Value {
        &self.raw
    }
}

impl TitleResponse {
    /// Wrap a decoded title document.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        TitleResponse { raw }
    }

    /// Return the backing document.
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }

    envelope_str_accessors! {
        /// Internal database id (`_id`)
        internal_id => "_id",
        /// ZDB-ID of the title
        identifier => "identifier",
        /// Medium (print, audiovisual, braille, microform, online, electronic)
        medium => "medium",
        /// Title of the publication
        title => "title",
        /// Publication statement
        publisher => "publisher",
        /// Publication history
        temporal => "temporal",
        /// URL of an RDF representation
        see_also => "seeAlso",
        /// URL of an RDF representation
        same_as => "sameAs",
    }

    /// List of valid ISSNs.
    ///
    /// A single string is returned as a one-element list.
    #[must_use]
    pub fn issn(&self) -> Option<Vec<&str>> {
        match self.field("issn")? {
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            Value::String(s) => Some(vec![s.as_str()]),
            _ => None,
        }
    }

    /// The raw PICA+ fragment.
    ///
    /// Only present when the title was found.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.field("data")
    }

    /// Whether the response carries a PICA+ fragment.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data().is_some_and(Value::is_object)
    }

    /// The PICA+ record, borrowed from this response.
    ///
    /// Returns `None` when `data` is missing or not an object.
    #[must_use]
    pub fn pica(&self) -> Option<PicaRecord<'_>> {
        self.data().filter(|d| d.is_object()).map(PicaRecord::new)
    }

    /// Consume the response, keeping only its PICA+ record.
    #[must_use]
    pub fn into_pica(self) -> Option<PicaRecord<'static>> {
        match self.raw {
            Value::Object(mut map) => map
                .remove("data")
                .filter(Value::is_object)
                .map(PicaRecord::from_owned),
            _ => None,
        }
    }

    /// Raw value of a PICA+ field, looked up inside `data`.
    #[must_use]
    pub fn pica_field(&self, tag: &str) -> Option<&Value> {
        self.data()?.as_object()?.get(tag)
    }

    /// Look up a field either inside `data` (`pica = true`) or at the top level.
    #[must_use]
    pub fn get(&self, name: &str, pica: bool) -> Option<&Value> {
        if pica {
            self.pica_field(name)
        } else {
            self.field(name)
        }
    }
}

/// One page of search results.
///
/// Metadata keys are `id` (URL of the query), `freetextQuery` (search
/// terms), `totalItems` (size of the whole result set) and `type` (always
/// `Collection`). Titles are listed under `member`, navigation under `view`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse {
    raw: Value,
}

impl Envelope for SearchResponse {
    fn raw(&self) -> &Value {
        &self.raw
    }
}

impl SearchResponse {
    /// Wrap a decoded search page.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        SearchResponse { raw }
    }

    envelope_str_accessors! {
        /// The search terms
        query => "freetextQuery",
    }

    /// Size of the whole result set.
    ///
    /// A missing, negative or unparseable count yields 0; numeric strings
    /// such as `"12"` are accepted.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.field_u64("totalItems").unwrap_or(0)
    }

    /// Raw `member` list.
    #[must_use]
    pub fn member(&self) -> Option<&[Value]> {
        self.field("member")?.as_array().map(Vec::as_slice)
    }

    /// Titles on this page, cloned from the backing document.
    #[must_use]
    pub fn titles(&self) -> Vec<TitleResponse> {
        self.member()
            .map(|members| {
                members
                    .iter()
                    .filter(|m| m.is_object())
                    .cloned()
                    .map(TitleResponse::new)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Consume the page, keeping its titles in source order.
    ///
    /// Returns `None` when `member` is missing or not a list.
    #[must_use]
    pub fn into_titles(self) -> Option<Vec<TitleResponse>> {
        let Value::Object(mut map) = self.raw else {
            return None;
        };
        match map.remove("member")? {
            Value::Array(members) => Some(
                members
                    .into_iter()
                    .filter(Value::is_object)
                    .map(TitleResponse::new)
                    .collect(),
            ),
            _ => None,
        }
    }

    /// The pagination view.
    #[must_use]
    pub fn view(&self) -> Option<ViewResponse<'_>> {
        self.field("view")
            .filter(|v| v.is_object())
            .map(ViewResponse::new)
    }

    /// Look up a field inside `view`.
    #[must_use]
    pub fn view_field(&self, name: &str) -> Option<&Value> {
        self.field("view")?.as_object()?.get(name)
    }

    /// Look up a field either inside `view` (`view = true`) or at the top level.
    #[must_use]
    pub fn get(&self, name: &str, view: bool) -> Option<&Value> {
        if view {
            self.view_field(name)
        } else {
            self.field(name)
        }
    }

    /// Link to the first page.
    #[must_use]
    pub fn view_first(&self) -> Option<&str> {
        self.view_field("first")?.as_str()
    }

    /// Link to the previous page, if any.
    #[must_use]
    pub fn view_previous(&self) -> Option<&str> {
        self.view_field("previous")?.as_str()
    }

    /// Link to the next page, if any.
    #[must_use]
    pub fn view_next(&self) -> Option<&str> {
        self.view_field("next")?.as_str()
    }

    /// Link to the last page.
    #[must_use]
    pub fn view_last(&self) -> Option<&str> {
        self.view_field("last")?.as_str()
    }
}

/// Pagination view of a search page.
///
/// Keys are `id` (link to the current page), `type` (always
/// `PartialCollectionView`), `first`, `last`, `totalItems` (records on the
/// current page), `pageIndex`, `numberOfPages`, `offset` (number of the first
/// record on the page), `limit` (maximum records per page) and, where they
/// exist, `previous` and `next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewResponse<'a> {
    raw: &'a Value,
}

impl Envelope for ViewResponse<'_> {
    fn raw(&self) -> &Value {
        self.raw
    }
}

impl<'a> ViewResponse<'a> {
    /// Wrap a borrowed view document.
    #[must_use]
    pub fn new(raw: &'a Value) -> Self {
        ViewResponse { raw }
    }

    fn link(&self, name: &str) -> Option<&'a str> {
        self.raw.get(name)?.as_str()
    }

    fn number(&self, name: &str) -> Option<u64> {
        self.raw.get(name).and_then(value_as_u64)
    }

    /// Number of records on the current page
    #[must_use]
    pub fn total_items(&self) -> Option<u64> {
        self.number("totalItems")
    }

    /// Index of the current page (1-based)
    #[must_use]
    pub fn page_index(&self) -> Option<u64> {
        self.number("pageIndex")
    }

    /// Number of result pages
    #[must_use]
    pub fn number_of_pages(&self) -> Option<u64> {
        self.number("numberOfPages")
    }

    /// Position of the first record on the current page
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.number("offset")
    }

    /// Maximum number of records per page
    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        self.number("limit")
    }

    /// Link to the first page
    #[must_use]
    pub fn first(&self) -> Option<&'a str> {
        self.link("first")
    }

    /// Link to the last page
    #[must_use]
    pub fn last(&self) -> Option<&'a str> {
        self.link("last")
    }

    /// Link to the previous page
    #[must_use]
    pub fn previous(&self) -> Option<&'a str> {
        self.link("previous")
    }

    /// Link to the next page
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<&'a str> {
        self.link("next")
    }

    /// Whether this is the last page of the result set.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.next().is_none()
    }
}
