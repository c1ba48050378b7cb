//! PICA+ record structures and subfield lookup.
//!
//! Every ZDB title record embeds its PICA+ cataloguing data under the `data`
//! key. That fragment maps a field tag (`"021A"`, `"005A"`, ...) to a list of
//! field occurrences, because most fields are repeatable:
//!
//! ```json
//! {
//!   "003@": [[["2736054-4"]]],
//!   "005A": [[{"0": "0044-2070"}, {"l": "0044-2070"}]],
//!   "021A": [[{"a": "¬Die@ Zeit"}, {"d": "Wochenzeitung für Politik"}]]
//! }
//! ```
//!
//! Two raw shapes occur and each has its own entry point:
//!
//! - [`PicaSource::scalar`] reads fixed single-value control fields, stored
//!   as a leaf nested three arrays deep with no subfield code.
//! - [`PicaSource::occurrences`] and [`PicaSource::query`] read coded
//!   subfields, stored per occurrence as `{code: value}` pairs.
//!
//! A field read through the wrong entry point is reported as absent.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use zdb_hydra::{PicaRecord, PicaSource, SubfieldQuery};
//!
//! let data = json!({"005A": [[{"0": "0044-2070"}], [{"0": "1234-5678"}]]});
//! let record = PicaRecord::new(&data);
//!
//! let first = record.query(&SubfieldQuery::new("005A", '0').unique());
//! assert_eq!(first.and_then(|v| v.into_string()), Some("0044-2070".to_string()));
//!
//! let all = record.query(&SubfieldQuery::new("005A", '0').joined());
//! assert_eq!(all.and_then(|v| v.into_string()), Some("0044-2070|1234-5678".to_string()));
//! ```

use crate::clean::{clean, clean_title};
use crate::envelope::Envelope;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Delimiter placed between values when a lookup joins its results.
pub const JOIN_DELIMITER: &str = "|";

/// A subfield within a PICA+ field occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character or digit)
    pub code: char,
    /// Subfield value
    pub value: String,
}

/// One occurrence of a (possibly repeatable) PICA+ field
///
/// Subfields keep their cataloguing order and codes may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOccurrence {
    /// Field tag, e.g. `"021A"`
    pub tag: String,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

impl FieldOccurrence {
    /// Create an occurrence without subfields
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        FieldOccurrence {
            tag: tag.into(),
            subfields: SmallVec::new(),
        }
    }

    /// Append a subfield
    pub fn add_subfield(&mut self, code: char, value: impl Into<String>) {
        self.subfields.push(Subfield {
            code,
            value: value.into(),
        });
    }

    /// Get the first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Iterate over every value for a subfield code, in source order
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Whether this occurrence has no subfields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subfields.is_empty()
    }

    /// Decode one raw occurrence.
    ///
    /// Accepts a list of `{code: value}` objects or a single object with one
    /// key per code. Entries whose key is not exactly one character, and
    /// leaves that are neither strings, numbers nor lists of those, are
    /// skipped. Any other shape is not a subfield occurrence and yields `None`.
    #[must_use]
    pub fn from_value(tag: &str, raw: &Value) -> Option<Self> {
        let mut occurrence = FieldOccurrence::new(tag);
        match raw {
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(pairs) = item {
                        occurrence.extend_from_pairs(pairs);
                    }
                }
            }
            Value::Object(pairs) => occurrence.extend_from_pairs(pairs),
            _ => return None,
        }
        Some(occurrence)
    }

    fn extend_from_pairs(&mut self, pairs: &Map<String, Value>) {
        for (key, leaf) in pairs {
            let mut chars = key.chars();
            let (Some(code), None) = (chars.next(), chars.next()) else {
                continue;
            };
            match leaf {
                Value::Array(values) => {
                    for value in values {
                        if let Some(text) = leaf_text(value) {
                            self.add_subfield(code, text);
                        }
                    }
                }
                other => {
                    if let Some(text) = leaf_text(other) {
                        self.add_subfield(code, text);
                    }
                }
            }
        }
    }
}

fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalization applied to each value returned by a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cleaning {
    /// Return values exactly as catalogued
    #[default]
    Raw,
    /// Collapse whitespace, see [`clean`]
    Whitespace,
    /// Strip title markup and collapse whitespace, see [`clean_title`]
    Title,
}

impl Cleaning {
    /// Apply this normalization to a value.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Cleaning::Raw => value.to_string(),
            Cleaning::Whitespace => clean(value),
            Cleaning::Title => clean_title(value),
        }
    }
}

/// A subfield lookup across all occurrences of one tag.
///
/// `SubfieldQuery` uses the builder pattern. By default it collects every
/// matching value as a list, unmodified.
///
/// # Examples
///
/// ```
/// use zdb_hydra::SubfieldQuery;
///
/// // First ISSN-L, whitespace-normalized
/// let query = SubfieldQuery::new("005A", 'l').unique().clean();
/// assert!(query.unique);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubfieldQuery {
    /// Field tag to look in
    pub tag: String,
    /// Subfield code to collect
    pub code: char,
    /// Return only the first match
    pub unique: bool,
    /// Normalization applied to each value
    pub cleaning: Cleaning,
    /// Join collected values with [`JOIN_DELIMITER`] (ignored when `unique`)
    pub joined: bool,
}

impl SubfieldQuery {
    /// Create a query collecting every `code` subfield of `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>, code: char) -> Self {
        SubfieldQuery {
            tag: tag.into(),
            code,
            unique: false,
            cleaning: Cleaning::Raw,
            joined: false,
        }
    }

    /// Return only the first match.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Collapse whitespace in each value.
    #[must_use]
    pub fn clean(mut self) -> Self {
        self.cleaning = Cleaning::Whitespace;
        self
    }

    /// Strip title markup and collapse whitespace in each value.
    #[must_use]
    pub fn clean_title(mut self) -> Self {
        self.cleaning = Cleaning::Title;
        self
    }

    /// Join the collected values into one string.
    #[must_use]
    pub fn joined(mut self) -> Self {
        self.joined = true;
        self
    }
}

/// Result of a [`SubfieldQuery`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubfieldValues {
    /// The first match of a unique query
    Single(String),
    /// Every match, in source order
    List(Vec<String>),
    /// Every match joined with [`JOIN_DELIMITER`]
    Joined(String),
}

impl SubfieldValues {
    /// Borrow the value as a string, if it is `Single` or `Joined`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SubfieldValues::Single(s) | SubfieldValues::Joined(s) => Some(s),
            SubfieldValues::List(_) => None,
        }
    }

    /// Convert to a single string; a list is joined with [`JOIN_DELIMITER`].
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            SubfieldValues::Single(s) | SubfieldValues::Joined(s) => Some(s),
            SubfieldValues::List(values) => Some(values.join(JOIN_DELIMITER)),
        }
    }

    /// Convert to a list of values.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SubfieldValues::Single(s) | SubfieldValues::Joined(s) => vec![s],
            SubfieldValues::List(values) => values,
        }
    }
}

/// Lookup operations over a PICA+ fragment.
///
/// Implementors provide raw field access; the query logic is shared.
pub trait PicaSource {
    /// The raw value stored under a tag.
    fn raw_field(&self, tag: &str) -> Option<&Value>;

    /// All decodable occurrences of a tag, in source order.
    ///
    /// Returns an empty list when the tag is missing or not a list.
    /// Occurrences with an unexpected shape are skipped.
    fn occurrences(&self, tag: &str) -> Vec<FieldOccurrence> {
        match self.raw_field(tag) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| FieldOccurrence::from_value(tag, item))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Read a single-value control field: first leaf of the first occurrence.
    ///
    /// The raw value must be nested exactly like `[[["value"]]]`; any
    /// missing or differently shaped level yields `None`.
    fn scalar(&self, tag: &str) -> Option<String> {
        let leaf = self
            .raw_field(tag)?
            .as_array()?
            .first()?
            .as_array()?
            .first()?
            .as_array()?
            .first()?;
        leaf_text(leaf)
    }

    /// Run a subfield query.
    ///
    /// Values are gathered from every occurrence in source order. A unique
    /// query yields the first match; otherwise all matches are returned as a
    /// list or joined string. No match at all yields `None`, never an empty
    /// list.
    fn query(&self, query: &SubfieldQuery) -> Option<SubfieldValues> {
        let occurrences = self.occurrences(&query.tag);
        let mut values = occurrences
            .iter()
            .flat_map(|occ| occ.subfields_by_code(query.code))
            .map(|value| query.cleaning.apply(value));

        if query.unique {
            return values.next().map(SubfieldValues::Single);
        }

        let collected: Vec<String> = values.collect();
        if collected.is_empty() {
            None
        } else if query.joined {
            Some(SubfieldValues::Joined(collected.join(JOIN_DELIMITER)))
        } else {
            Some(SubfieldValues::List(collected))
        }
    }

    /// Flag-style form of [`query`](PicaSource::query).
    #[allow(clippy::fn_params_excessive_bools)]
    fn subfield_values(
        &self,
        tag: &str,
        code: char,
        unique: bool,
        clean: bool,
        joined: bool,
    ) -> Option<SubfieldValues> {
        let mut query = SubfieldQuery::new(tag, code);
        query.unique = unique;
        query.joined = joined;
        if clean {
            query.cleaning = Cleaning::Whitespace;
        }
        self.query(&query)
    }
}

/// A PICA+ record: the `data` fragment of a title record.
///
/// The record either borrows the fragment from its title response or owns
/// it. Fields are decoded on lookup, so one malformed field never hides the
/// others.
#[derive(Debug, Clone, PartialEq)]
pub struct PicaRecord<'a> {
    data: Cow<'a, Value>,
}

impl<'a> PicaRecord<'a> {
    /// Wrap a borrowed `data` fragment.
    #[must_use]
    pub fn new(data: &'a Value) -> Self {
        PicaRecord {
            data: Cow::Borrowed(data),
        }
    }

    /// Wrap an owned `data` fragment.
    #[must_use]
    pub fn from_owned(data: Value) -> PicaRecord<'static> {
        PicaRecord {
            data: Cow::Owned(data),
        }
    }

    /// Detach the record from the document it borrows from.
    #[must_use]
    pub fn into_owned(self) -> PicaRecord<'static> {
        PicaRecord {
            data: Cow::Owned(self.data.into_owned()),
        }
    }

    /// Sorted list of the tags present in the record.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.names()
    }

    /// Whether the record has at least one occurrence of a tag.
    #[must_use]
    pub fn has_field(&self, tag: &str) -> bool {
        match self.raw_field(tag) {
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// Iterate over all decodable occurrences, grouped by tag in source order.
    pub fn fields(&self) -> impl Iterator<Item = FieldOccurrence> + '_ {
        self.data
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys())
            .flat_map(move |tag| self.occurrences(tag))
    }
}

impl Envelope for PicaRecord<'_> {
    fn raw(&self) -> &Value {
        &self.data
    }
}

impl PicaSource for PicaRecord<'_> {
    fn raw_field(&self, tag: &str) -> Option<&Value> {
        self.field(tag)
    }
}
