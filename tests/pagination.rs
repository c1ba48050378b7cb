//! Integration tests for paginated traversal of search results.

mod common;

use common::{client, search_page, search_url, MockTransport};
use pretty_assertions::assert_eq;
use serde_json::json;
use zdb_hydra::{Envelope, DEFAULT_STREAM_SIZE};

const QUERY: &str = "zeit";
const SIZE: usize = 2;

fn three_pages() -> MockTransport {
    MockTransport::new()
        .with(search_url(QUERY, 1, 1), json!({"totalItems": 6}))
        .with(
            search_url(QUERY, SIZE, 1),
            search_page(QUERY, 6, 1, SIZE, Some(search_url(QUERY, SIZE, 2))),
        )
        .with(
            search_url(QUERY, SIZE, 2),
            search_page(QUERY, 6, 3, SIZE, Some(search_url(QUERY, SIZE, 3))),
        )
        .with(
            search_url(QUERY, SIZE, 3),
            search_page(QUERY, 6, 5, SIZE, None),
        )
}

fn identifiers(titles: &[zdb_hydra::TitleResponse]) -> Vec<String> {
    titles
        .iter()
        .filter_map(|t| t.identifier().map(str::to_string))
        .collect()
}

#[test]
fn test_stream_walks_all_linked_pages_in_order() {
    let hydra = client(three_pages());
    let titles: Vec<_> = hydra.stream(QUERY, SIZE, 1).collect();

    assert_eq!(titles.len(), 3 * SIZE);
    assert_eq!(
        identifiers(&titles),
        vec!["1-0", "2-0", "3-0", "4-0", "5-0", "6-0"]
    );
    assert_eq!(
        hydra.transport().calls(),
        vec![
            search_url(QUERY, 1, 1),
            search_url(QUERY, SIZE, 1),
            search_url(QUERY, SIZE, 2),
            search_url(QUERY, SIZE, 3),
        ]
    );
}

#[test]
fn test_stream_stops_after_failed_page() {
    let transport = MockTransport::new()
        .with(search_url(QUERY, 1, 1), json!({"totalItems": 6}))
        .with(
            search_url(QUERY, SIZE, 1),
            search_page(QUERY, 6, 1, SIZE, Some(search_url(QUERY, SIZE, 2))),
        )
        // page 2 is missing: the mock reports a failed request
        .with(
            search_url(QUERY, SIZE, 3),
            search_page(QUERY, 6, 5, SIZE, None),
        );
    let hydra = client(transport);

    let titles: Vec<_> = hydra.stream(QUERY, SIZE, 1).collect();
    assert_eq!(identifiers(&titles), vec!["1-0", "2-0"]);
    assert!(!hydra
        .transport()
        .calls()
        .contains(&search_url(QUERY, SIZE, 3)));
}

#[test]
fn test_empty_result_set_fetches_no_pages() {
    let transport = MockTransport::new().with(
        search_url(QUERY, 1, 1),
        json!({"totalItems": "0", "member": []}),
    );
    let hydra = client(transport);

    assert_eq!(hydra.stream(QUERY, SIZE, 1).count(), 0);
    assert_eq!(hydra.transport().calls(), vec![search_url(QUERY, 1, 1)]);
}

#[test]
fn test_failed_probe_yields_nothing() {
    let hydra = client(MockTransport::new());

    assert_eq!(hydra.total(QUERY), 0);
    assert_eq!(hydra.stream(QUERY, DEFAULT_STREAM_SIZE, 1).count(), 0);
    assert_eq!(hydra.transport().call_count(), 2);
}

#[test]
fn test_one_fetch_per_page_boundary() {
    let hydra = client(three_pages());
    let mut stream = hydra.stream(QUERY, SIZE, 1);

    assert_eq!(hydra.transport().call_count(), 0);
    let first = stream.next().expect("first title");
    assert_eq!(first.identifier(), Some("1-0"));
    // probe + page 1
    assert_eq!(hydra.transport().call_count(), 2);

    stream.next().expect("second title");
    assert_eq!(hydra.transport().call_count(), 2);

    stream.next().expect("third title");
    assert_eq!(hydra.transport().call_count(), 3);
    assert_eq!(stream.pages_fetched(), 2);
}

#[test]
fn test_stream_starts_at_requested_page() {
    let hydra = client(three_pages());
    let titles: Vec<_> = hydra.stream(QUERY, SIZE, 2).collect();
    assert_eq!(identifiers(&titles), vec!["3-0", "4-0", "5-0", "6-0"]);
}

#[test]
fn test_stream_is_restartable() {
    let hydra = client(three_pages());
    let partial: Vec<_> = hydra.stream(QUERY, SIZE, 1).take(3).collect();
    let full: Vec<_> = hydra.stream(QUERY, SIZE, 1).collect();

    assert_eq!(identifiers(&partial), vec!["1-0", "2-0", "3-0"]);
    assert_eq!(full.len(), 6);
}

#[test]
fn test_collect_matches_stream() {
    let hydra = client(three_pages());
    let streamed: Vec<_> = hydra.stream(QUERY, SIZE, 1).collect();
    let collected = hydra.collect(QUERY, SIZE, 1);
    assert_eq!(streamed, collected);
}

#[test]
fn test_search_single_page() {
    let hydra = client(three_pages());
    let titles = hydra.search(QUERY, SIZE, 2).expect("page 2 exists");
    assert_eq!(identifiers(&titles), vec!["3-0", "4-0"]);

    let page = hydra.search_page(QUERY, SIZE, 3).expect("page 3 exists");
    assert_eq!(page.total_items(), 6);
    assert_eq!(page.view_next(), None);
    assert!(page.view().is_some_and(|v| v.is_last_page()));
    assert_eq!(page.types(), Some(vec!["Collection"]));
}

#[test]
fn test_two_page_link_cycle_ends_stream() {
    let transport = MockTransport::new()
        .with(search_url(QUERY, 1, 1), json!({"totalItems": 4}))
        .with(
            search_url(QUERY, SIZE, 1),
            search_page(QUERY, 4, 1, SIZE, Some(search_url(QUERY, SIZE, 2))),
        )
        .with(
            search_url(QUERY, SIZE, 2),
            search_page(QUERY, 4, 3, SIZE, Some(search_url(QUERY, SIZE, 1))),
        );
    let hydra = client(transport);

    let mut stream = hydra.stream(QUERY, SIZE, 1);
    let titles: Vec<_> = stream.by_ref().take(100).collect();
    assert_eq!(identifiers(&titles), vec!["1-0", "2-0", "3-0", "4-0"]);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.pages_fetched(), 2);
    // probe + two pages
    assert_eq!(hydra.transport().call_count(), 3);
}
