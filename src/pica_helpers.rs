//! Helper methods for accessing common ZDB bibliographic fields.
//!
//! This module provides the `PicaHelpers` trait, which binds frequently-used
//! PICA+ fields to named methods. The trait is automatically implemented for
//! all types that implement [`PicaSource`], so the methods are available on
//! every [`PicaRecord`](crate::PicaRecord).
//!
//! Tags and subfield codes follow the ZDB PICA+ format, see
//! <https://zeitschriftendatenbank.github.io/pica3plus/>.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use zdb_hydra::{PicaHelpers, PicaRecord};
//!
//! let data = json!({
//!     "003@": [[["2736054-4"]]],
//!     "021A": [[{"a": "¬Die@ Zeit"}]]
//! });
//! let record = PicaRecord::new(&data);
//! assert_eq!(record.idn().as_deref(), Some("2736054-4"));
//! assert_eq!(record.title().as_deref(), Some("Die Zeit"));
//! ```

use crate::pica::{PicaSource, SubfieldQuery, SubfieldValues, JOIN_DELIMITER};

/// Tag of the record identifier (IDN).
pub const TAG_IDN: &str = "003@";
/// Tag of the ISSN field.
pub const TAG_ISSN: &str = "005A";
/// Tag of the access rights field of online resources.
pub const TAG_ACCESS: &str = "017C";
/// Tag of the main title field.
pub const TAG_TITLE: &str = "021A";
/// Tag of the publication statement.
pub const TAG_PUBLISHER: &str = "033A";
/// Tag of the relation to parallel editions.
pub const TAG_PARALLEL: &str = "039D";
/// Tag of the Dewey decimal classification.
pub const TAG_DEWEY: &str = "045U";

fn first(source: &(impl PicaSource + ?Sized), query: SubfieldQuery) -> Option<String> {
    source.query(&query.unique()).and_then(SubfieldValues::into_string)
}

fn joined(source: &(impl PicaSource + ?Sized), query: SubfieldQuery) -> Option<String> {
    source.query(&query.joined()).and_then(SubfieldValues::into_string)
}

/// Extension trait providing named accessors for PICA+ records.
pub trait PicaHelpers: PicaSource {
    /// Record identifier (IDN) from field 003@
    #[must_use]
    fn idn(&self) -> Option<String> {
        self.scalar(TAG_IDN)
    }

    /// Main title from field 021A, subfield 'a'
    ///
    /// Title markup (`¬...@`) is removed.
    #[must_use]
    fn title(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_TITLE, 'a').clean_title())
    }

    /// Title supplement from field 021A, subfield 'd'
    #[must_use]
    fn title_supplement(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_TITLE, 'd').clean_title())
    }

    /// Statement of responsibility from field 021A, subfield 'h'
    #[must_use]
    fn title_responsibility(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_TITLE, 'h').clean())
    }

    /// Publisher name from field 033A, subfield 'n'
    #[must_use]
    fn publisher(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_PUBLISHER, 'n').clean())
    }

    /// Place of publication from field 033A, subfield 'p'
    #[must_use]
    fn publisher_place(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_PUBLISHER, 'p').clean())
    }

    /// ISSN from field 005A, subfield '0'
    #[must_use]
    fn issn(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_ISSN, '0').clean())
    }

    /// Linking ISSN (ISSN-L) from field 005A, subfield 'l'
    #[must_use]
    fn issn_l(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_ISSN, 'l').clean())
    }

    /// Access rights code (e.g. `KF` for free access) from field 017C, subfield '4'
    #[must_use]
    fn access_rights(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_ACCESS, '4').clean())
    }

    /// Access status note from field 017C, subfield 'z'
    #[must_use]
    fn access_status(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_ACCESS, 'z').clean())
    }

    /// Source of the access information from field 017C, subfield '2'
    #[must_use]
    fn access_source(&self) -> Option<String> {
        first(self, SubfieldQuery::new(TAG_ACCESS, '2').clean())
    }

    /// Dewey classes from field 045U, subfield 'e', joined with `|`
    #[must_use]
    fn dewey(&self) -> Option<String> {
        joined(self, SubfieldQuery::new(TAG_DEWEY, 'e').clean())
    }

    /// Relation labels of parallel editions from field 039D, subfield 'c'
    #[must_use]
    fn parallel_tag(&self) -> Option<String> {
        joined(self, SubfieldQuery::new(TAG_PARALLEL, 'c').clean())
    }

    /// Types of parallel editions from field 039D, subfield 'n'
    #[must_use]
    fn parallel_type(&self) -> Option<String> {
        joined(self, SubfieldQuery::new(TAG_PARALLEL, 'n').clean())
    }

    /// ZDB identifiers of parallel editions from field 039D, subfield '6'
    #[must_use]
    fn parallel_identifier(&self) -> Option<String> {
        joined(self, SubfieldQuery::new(TAG_PARALLEL, '6').clean())
    }

    /// ISSNs of parallel editions from field 039D
    ///
    /// The ISSN is catalogued under either subfield 'I' or 'X'. Matches for
    /// 'I' come first, then matches for 'X', joined with `|`.
    #[must_use]
    fn parallel_issn(&self) -> Option<String> {
        let parts: Vec<String> = ['I', 'X']
            .into_iter()
            .filter_map(|code| joined(self, SubfieldQuery::new(TAG_PARALLEL, code).clean()))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(JOIN_DELIMITER))
        }
    }
}

impl<T: PicaSource + ?Sized> PicaHelpers for T {}
