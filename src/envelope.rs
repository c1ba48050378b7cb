//! Typed read-only access to decoded JSON-LD documents.
//!
//! This module defines the [`Envelope`] trait shared by every response view
//! (title records, search pages, pagination views and PICA+ fragments). A view
//! wraps a decoded [`serde_json::Value`] and resolves named fields, reporting
//! a missing key, a non-object document or a value of the wrong type as `None`.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use zdb_hydra::{Envelope, TitleResponse};
//!
//! let title = TitleResponse::new(json!({"id": "https://ld.zdb-services.de/resource/2736054-4"}));
//! assert_eq!(title.id(), Some("https://ld.zdb-services.de/resource/2736054-4"));
//! assert_eq!(title.field("missing"), None);
//! ```

use serde_json::Value;

/// Common trait for read-only views over a decoded JSON document.
///
/// Implementors only provide [`raw`](Envelope::raw); every other method is
/// derived from it.
pub trait Envelope {
    /// The backing document.
    fn raw(&self) -> &Value;

    /// Look up a top-level field by name.
    ///
    /// Returns `None` when the document is not an object or has no such key.
    #[must_use]
    fn field(&self, name: &str) -> Option<&Value> {
        self.raw().as_object()?.get(name)
    }

    /// Look up a top-level field holding a string.
    #[must_use]
    fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name)?.as_str()
    }

    /// Look up a top-level field holding a non-negative integer.
    ///
    /// Accepts JSON numbers as well as numeric strings such as `"42"`.
    #[must_use]
    fn field_u64(&self, name: &str) -> Option<u64> {
        self.field(name).and_then(value_as_u64)
    }

    /// Sorted list of the top-level field names.
    #[must_use]
    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .raw()
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// The `id` field (usually the URL of the resource).
    #[must_use]
    fn id(&self) -> Option<&str> {
        self.field_str("id")
    }

    /// The `type` field as a list.
    ///
    /// A single string is returned as a one-element list; title records carry
    /// a list of publication types.
    #[must_use]
    fn types(&self) -> Option<Vec<&str>> {
        match self.field("type")? {
            Value::String(s) => Some(vec![s.as_str()]),
            Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }

    /// The JSON-LD `@context` field.
    #[must_use]
    fn context(&self) -> Option<&Value> {
        self.field("@context")
    }

    /// Serialize the backing document to compact JSON.
    #[must_use]
    fn to_json_string(&self) -> String {
        self.raw().to_string()
    }

    /// Serialize the backing document to indented JSON.
    #[must_use]
    fn to_json_string_pretty(&self) -> String {
        serde_json::to_string_pretty(self.raw()).unwrap_or_else(|_| self.raw().to_string())
    }
}

impl Envelope for Value {
    fn raw(&self) -> &Value {
        self
    }
}

/// Interpret a value as a non-negative integer.
///
/// Numbers and trimmed numeric strings are accepted; negative numbers,
/// fractions and anything else yield `None`.
#[must_use]
pub fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whether a decoded document carries no data at all.
///
/// `null`, empty objects, empty arrays and empty strings count as empty.
#[must_use]
pub fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_lookup_on_object() {
        let doc = json!({"id": "abc", "count": 3});
        assert_eq!(doc.field_str("id"), Some("abc"));
        assert_eq!(doc.field_u64("count"), Some(3));
        assert_eq!(doc.field("nope"), None);
    }

    #[test]
    fn test_field_lookup_on_non_object() {
        let doc = json!(["id"]);
        assert_eq!(doc.field("id"), None);
        assert!(doc.names().is_empty());
    }

    #[test]
    fn test_wrong_type_is_absent() {
        let doc = json!({"id": 12});
        assert_eq!(doc.id(), None);
    }

    #[test]
    fn test_names_sorted() {
        let doc = json!({"title": 1, "id": 2, "@context": 3});
        assert_eq!(doc.names(), vec!["@context", "id", "title"]);
    }

    #[test]
    fn test_types_string_or_list() {
        assert_eq!(json!({"type": "Collection"}).types(), Some(vec!["Collection"]));
        assert_eq!(
            json!({"type": ["Periodical", "Newspaper"]}).types(),
            Some(vec!["Periodical", "Newspaper"])
        );
        assert_eq!(json!({}).types(), None);
    }

    #[test]
    fn test_value_as_u64() {
        assert_eq!(value_as_u64(&json!(7)), Some(7));
        assert_eq!(value_as_u64(&json!("0")), Some(0));
        assert_eq!(value_as_u64(&json!(" 12 ")), Some(12));
        assert_eq!(value_as_u64(&json!(-1)), None);
        assert_eq!(value_as_u64(&json!("many")), None);
        assert_eq!(value_as_u64(&json!(null)), None);
    }

    #[test]
    fn test_is_empty_document() {
        assert!(is_empty_document(&json!(null)));
        assert!(is_empty_document(&json!({})));
        assert!(is_empty_document(&json!([])));
        assert!(!is_empty_document(&json!({"id": "x"})));
        assert!(!is_empty_document(&json!(0)));
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let doc = json!({"title": "Die Zeit"});
        assert_eq!(doc.to_json_string(), r#"{"title":"Die Zeit"}"#);
        assert!(doc.to_json_string_pretty().contains("\n  \"title\""));
    }
}
