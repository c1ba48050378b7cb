#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # ZDB Hydra
//!
//! A Rust client for the Hydra JSON-LD API of the German Union Catalogue of
//! Serials (ZDB), with a typed view of the PICA+ record embedded in every
//! title.
//!
//! ## Quick Start
//!
//! ### Looking up a title
//!
//! ```ignore
//! use zdb_hydra::{Hydra, PicaHelpers};
//!
//! let hydra = Hydra::new();
//! if let Some(title) = hydra.title("2736054-4") {
//!     println!("{:?} ({:?})", title.title(), title.medium());
//!     if let Some(pica) = title.pica() {
//!         println!("ISSN-L: {:?}", pica.issn_l());
//!     }
//! }
//! ```
//!
//! ### Walking all results of a query
//!
//! ```ignore
//! use zdb_hydra::Hydra;
//!
//! let hydra = Hydra::new();
//! println!("{} hits", hydra.total("tit=zeit"));
//! for title in hydra.stream("tit=zeit", 100, 1) {
//!     println!("{:?}", title.identifier());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — The [`Hydra`] client (title lookup, search, pagination)
//! - [`stream`] — Lazy page-by-page traversal of search results
//! - [`response`] — Title, search page and pagination views
//! - [`pica`] — PICA+ fields, subfields and subfield queries
//! - [`pica_helpers`] — Named accessors for common bibliographic fields
//! - [`envelope`] — Typed lookup over decoded JSON documents
//! - [`clean`] — Normalization of catalogue values
//! - [`transport`] — The [`Fetch`] seam and the HTTP transport
//! - [`config`] — Client configuration
//! - [`error`] — Error types and result type

pub mod clean;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod macros;
pub mod pica;
pub mod pica_helpers;
pub mod response;
pub mod stream;
pub mod transport;

pub use client::{Hydra, DEFAULT_SEARCH_SIZE, DEFAULT_STREAM_SIZE};
pub use config::HydraConfig;
pub use envelope::Envelope;
pub use error::{HydraError, Result};
pub use pica::{
    Cleaning, FieldOccurrence, PicaRecord, PicaSource, Subfield, SubfieldQuery, SubfieldValues,
    JOIN_DELIMITER,
};
pub use pica_helpers::PicaHelpers;
pub use response::{SearchResponse, TitleResponse, ViewResponse};
pub use stream::TitleStream;
pub use transport::{Fetch, HttpTransport};
