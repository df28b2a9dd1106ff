//! Cursor pagination against a mock server.

mod common;

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{accounts_xml, TestHarness};
use recurly_client::{Error, Params};

#[tokio::test]
async fn follows_next_cursor_until_exhausted() {
    let harness = TestHarness::new().await;
    let link = harness.next_link("accounts", "1304958672");

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("cursor", "1304958672"))
        .respond_with(ResponseTemplate::new(200).set_body_string(accounts_xml(&["c", "d"])))
        .with_priority(1)
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("state", "active"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_string(accounts_xml(&["a", "b"])),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut pager = harness
        .client
        .accounts()
        .list(Params::new().with("state", "active"));

    assert!(pager.has_more());
    let first: Vec<_> = pager.fetch().await.unwrap().into_iter().map(|a| a.code).collect();
    assert_eq!(first, ["a", "b"]);
    assert_eq!(pager.cursor(), Some("1304958672"));
    assert!(pager.has_more());

    let second: Vec<_> = pager.fetch().await.unwrap().into_iter().map(|a| a.code).collect();
    assert_eq!(second, ["c", "d"]);
    assert!(!pager.has_more());

    // Exhausted pagers return empty pages without another request.
    assert!(pager.fetch().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_all_concatenates_pages() {
    let harness = TestHarness::new().await;
    let link = harness.next_link("accounts", "abc");

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("cursor", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(accounts_xml(&["b"])))
        .with_priority(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("per_page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_string(accounts_xml(&["a"])),
        )
        .mount(&harness.server)
        .await;

    let accounts = harness
        .client
        .accounts()
        .list(Params::new())
        .per_page(1)
        .fetch_all()
        .await
        .unwrap();

    let codes: Vec<_> = accounts.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, ["a", "b"]);
}

#[tokio::test]
async fn empty_page_ends_iteration() {
    let harness = TestHarness::new().await;
    let link = harness.next_link("accounts", "ignored");
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_string(r#"<accounts type="array"></accounts>"#),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut pager = harness.client.accounts().list(Params::new());
    assert!(pager.fetch().await.unwrap().is_empty());
    assert!(!pager.has_more());
}

#[tokio::test]
async fn error_status_fails_the_fetch() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts/1/subscriptions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&harness.server)
        .await;

    let mut pager = harness
        .client
        .subscriptions()
        .list_for_account("1", Params::new());
    let err = pager.fetch().await.unwrap_err();

    match err {
        Error::Status { response } => assert!(response.is_server_error()),
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(pager.has_more());
}

#[tokio::test]
async fn count_uses_head_and_records_header() {
    let harness = TestHarness::new().await;
    Mock::given(method("HEAD"))
        .and(path("/v2/transactions"))
        .and(query_param("state", "successful"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Records", "1234"))
        .expect(1)
        .mount(&harness.server)
        .await;

    let count = harness
        .client
        .transactions()
        .list(Params::new().with("state", "successful"))
        .count()
        .await
        .unwrap();

    assert_eq!(count, 1234);
}
