//! Sidebar filter tests

mod common;

use std::time::Duration;

use common::{load_sample, load_sample_with, SampleIds, TestRuntime};
use docsite::events::{DomEvent, Key, KeyEvent, Modifiers};
use docsite::runtime::{HeadlessPlatform, PlatformCall};
use docsite::storage::MemoryStorage;
use docsite::SiteConfig;

fn visible_links(runtime: &TestRuntime, ids: &SampleIds) -> Vec<String> {
    ids.nav_links
        .iter()
        .filter(|link| !runtime.page().is_hidden(**link))
        .map(|link| runtime.page().text_content(*link))
        .collect()
}

fn visible_titles(runtime: &TestRuntime, ids: &SampleIds) -> Vec<String> {
    ids.section_titles
        .iter()
        .filter(|title| !runtime.page().is_hidden(**title))
        .map(|title| runtime.page().text_content(*title))
        .collect()
}

#[test]
fn test_filter_hides_non_matching_links() {
    let (mut runtime, ids) = load_sample();

    runtime.dispatch(DomEvent::input(ids.search, "sql"));

    assert_eq!(visible_links(&runtime, &ids), vec!["SQL Queries"]);
    assert_eq!(visible_titles(&runtime, &ids), vec!["Reference"]);
    assert_eq!(
        runtime.page().style(ids.nav_links[0], "display"),
        Some("none")
    );
}

#[test]
fn test_filter_is_case_insensitive_and_trimmed() {
    let (mut runtime, ids) = load_sample();

    runtime.dispatch(DomEvent::input(ids.search, "  QUER "));

    assert_eq!(
        visible_links(&runtime, &ids),
        vec!["SQL Queries", "KQL Queries"]
    );
}

#[test]
fn test_empty_query_shows_everything() {
    let (mut runtime, ids) = load_sample();

    runtime.dispatch(DomEvent::input(ids.search, "zzz"));
    assert!(visible_links(&runtime, &ids).is_empty());
    assert!(visible_titles(&runtime, &ids).is_empty());

    runtime.dispatch(DomEvent::input(ids.search, ""));
    assert_eq!(visible_links(&runtime, &ids).len(), 4);
    assert_eq!(visible_titles(&runtime, &ids).len(), 2);
    assert_eq!(runtime.page().style(ids.nav_links[0], "display"), None);
}

#[test]
fn test_debounced_filter_applies_latest_query() {
    let config = SiteConfig {
        search_debounce_ms: 200,
        ..SiteConfig::default()
    };
    let (mut runtime, ids) = load_sample_with(config, HeadlessPlatform::new(), MemoryStorage::new());

    runtime.dispatch(DomEvent::input(ids.search, "kql"));
    runtime.advance(Duration::from_millis(100));
    assert_eq!(visible_links(&runtime, &ids).len(), 4);

    runtime.dispatch(DomEvent::input(ids.search, "install"));
    runtime.advance(Duration::from_millis(100));
    // The "kql" filter was superseded
    assert_eq!(visible_links(&runtime, &ids).len(), 4);

    runtime.advance(Duration::from_millis(100));
    assert_eq!(visible_links(&runtime, &ids), vec!["Installation"]);
}

#[test]
fn test_ctrl_k_focuses_and_selects_search() {
    let (mut runtime, ids) = load_sample();

    let outcome = runtime.dispatch(DomEvent::key_down(
        ids.content,
        KeyEvent::new(Key::Char('k'), Modifiers::CTRL),
    ));

    assert!(outcome.default_prevented);
    assert_eq!(
        runtime.platform().calls,
        vec![PlatformCall::Focus(ids.search), PlatformCall::Select(ids.search)]
    );
}

#[test]
fn test_cmd_k_on_macos() {
    let (mut runtime, ids) = load_sample();

    runtime.dispatch(DomEvent::key_down(
        ids.content,
        KeyEvent::new(Key::Char('k'), Modifiers::META),
    ));

    assert_eq!(runtime.platform().focused(), Some(ids.search));
}

#[test]
fn test_plain_k_is_not_a_shortcut() {
    let (mut runtime, ids) = load_sample();

    let outcome = runtime.dispatch(DomEvent::key_down(
        ids.content,
        KeyEvent::plain(Key::Char('k')),
    ));

    assert!(!outcome.default_prevented);
    assert!(runtime.platform().calls.is_empty());
}
