//! Transport and decode failures.

mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use common::TestHarness;
use recurly_client::{Client, ClientOptions, Error};

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let options = ClientOptions::with_base_url(format!("http://{addr}/v2/"));
    let client = Client::with_options("your-subdomain", "key", options).unwrap();

    let err = client.accounts().get("1").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_keeps_the_response() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<account><account_code>1</account_code><created_at>yesterday</created_at></account>",
        ))
        .mount(&harness.server)
        .await;

    let err = harness.client.accounts().get("1").await.unwrap_err();

    match err {
        Error::Decode { response, .. } => {
            assert!(response.is_ok());
            assert!(std::str::from_utf8(response.body()).unwrap().contains("yesterday"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_data_not_failure() {
    let harness = TestHarness::new().await;
    Mock::given(method("PUT"))
        .and(path("/v2/invoices/1001/collect"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&harness.server)
        .await;

    let (response, invoice) = harness.client.invoices().collect("1001").await.unwrap();

    assert!(response.is_server_error());
    assert!(invoice.is_none());
}
