//! Common test fixtures and an in-memory transport shared across the test suite.

use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use zdb_hydra::{Fetch, Hydra, HydraConfig};

/// Base URL used by all fixture clients.
#[allow(dead_code)]
pub const BASE: &str = "http://zdb.test/api/tit";

/// In-memory transport that records every requested URL.
///
/// URLs without a document behave like failed requests.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockTransport {
    docs: HashMap<String, Value>,
    calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, doc: Value) -> Self {
        self.docs.insert(url.into(), doc);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Fetch for MockTransport {
    fn fetch(&self, url: &str) -> Option<Value> {
        self.calls.borrow_mut().push(url.to_string());
        self.docs.get(url).cloned()
    }
}

/// Creates a client on top of a mock transport.
#[allow(dead_code)]
pub fn client(transport: MockTransport) -> Hydra<MockTransport> {
    Hydra::with_transport(HydraConfig::new().with_base_url(BASE), transport)
}

/// Search URL for `query`, as built by the client.
#[allow(dead_code)]
pub fn search_url(query: &str, size: usize, page: usize) -> String {
    format!("{BASE}.jsonld?q={query}&size={size}&page={page}")
}

/// A title record with a minimal PICA+ fragment.
#[allow(dead_code)]
pub fn title_record(zdb_id: &str, title: &str) -> Value {
    json!({
        "id": format!("https://ld.zdb-services.de/resource/{zdb_id}"),
        "type": ["http://purl.org/ontology/bibo/Periodical"],
        "identifier": zdb_id,
        "medium": "print",
        "issn": [],
        "title": title,
        "publisher": "Hamburg : Zeitverl. Bucerius",
        "temporal": "1946 -",
        "seeAlso": format!("https://ld.zdb-services.de/data/{zdb_id}.rdf"),
        "sameAs": format!("https://ld.zdb-services.de/resource/{zdb_id}"),
        "data": {
            "003@": [[[zdb_id]]],
            "021A": [[{"a": title}]]
        }
    })
}

/// One search page with `count` titles numbered from `first`.
///
/// `next` is the link to the following page, if any.
#[allow(dead_code)]
pub fn search_page(
    query: &str,
    total: u64,
    first: usize,
    count: usize,
    next: Option<String>,
) -> Value {
    let members: Vec<Value> = (first..first + count)
        .map(|n| title_record(&format!("{n}-0"), &format!("Title {n}")))
        .collect();
    let mut view = json!({
        "type": "PartialCollectionView",
        "totalItems": count,
        "offset": first,
        "limit": count,
    });
    if let Some(next) = next {
        view["next"] = Value::String(next);
    }
    json!({
        "type": "Collection",
        "freetextQuery": query,
        "totalItems": total,
        "member": members,
        "view": view,
    })
}

/// A realistic PICA+ fragment of a weekly newspaper.
#[allow(dead_code)]
pub fn zeit_pica() -> Value {
    json!({
        "001A": [[{"0": "1250:01-01-77"}]],
        "002@": [[{"0": "Abvz"}]],
        "003@": [[["012345678"]]],
        "005A": [
            [{"0": "0044-2070"}, {"l": "1234-5678"}],
            [{"0": "2345-6789"}, {"l": "2345-6789"}]
        ],
        "006Z": [[{"0": "2736054-4"}]],
        "017C": [[{"u": "https://www.zeit.de/"}, {"4": "KF"}, {"z": "Kostenfrei"}, {"2": "ZDB"}]],
        "021A": [[
            {"a": "¬Die@ Zeit"},
            {"d": "Wochenzeitung für Politik,\n Wirtschaft, Wissen und Kultur"},
            {"h": "hrsg. von  Gerd Bucerius"}
        ]],
        "033A": [[{"p": "Hamburg"}, {"n": "Zeitverl. Bucerius"}]],
        "039D": [
            [{"c": "Online-Ausg."}, {"n": "Online-Ausg."}, {"6": "2091115-9"}, {"I": "1436-2497"}],
            [{"c": "Elektronische Reproduktion"}, {"n": "Mikroform"}, {"6": "2208432-5"}, {"X": "0931-4601"}]
        ],
        "045U": [[{"e": ["070", "320"]}]]
    })
}
