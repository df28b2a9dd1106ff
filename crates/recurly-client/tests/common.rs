//! Common test utilities for recurly-client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use recurly_client::{Client, ClientOptions};
use wiremock::MockServer;

/// A mock API server and a client pointed at it.
pub struct TestHarness {
    /// The mock server standing in for the API.
    pub server: MockServer,
    /// A client whose base URL is `{server}/v2/`.
    pub client: Client,
}

impl TestHarness {
    /// Start a fresh mock server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let options = ClientOptions::with_base_url(format!("{}/v2/", server.uri()));
        let client = Client::with_options("your-subdomain", "test-api-key", options)
            .expect("Failed to build client");
        Self { server, client }
    }

    /// Link header pointing at the next page of `path`.
    pub fn next_link(&self, path: &str, cursor: &str) -> String {
        format!(r#"<{}/v2/{path}?cursor={cursor}>; rel="next""#, self.server.uri())
    }
}

/// A full account document as the API returns it.
pub const ACCOUNT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<account href="https://your-subdomain.recurly.com/v2/accounts/1">
  <adjustments href="https://your-subdomain.recurly.com/v2/accounts/1/adjustments"/>
  <billing_info href="https://your-subdomain.recurly.com/v2/accounts/1/billing_info"/>
  <invoices href="https://your-subdomain.recurly.com/v2/accounts/1/invoices"/>
  <account_code>1</account_code>
  <state>active</state>
  <username>verena1234</username>
  <email>verena@example.com</email>
  <cc_emails>bob@example.com</cc_emails>
  <first_name>Verena</first_name>
  <last_name>Example</last_name>
  <company_name>New Company Name</company_name>
  <vat_number>ST-1937</vat_number>
  <tax_exempt type="boolean">false</tax_exempt>
  <address>
    <address1>123 Main St.</address1>
    <address2>Suite 101</address2>
    <city>San Francisco</city>
    <state>CA</state>
    <zip>94105</zip>
    <country>US</country>
    <phone>8015551234</phone>
  </address>
  <accept_language>en-US</accept_language>
  <hosted_login_token>a92468579e9c4231a6c0031c4716c01d</hosted_login_token>
  <created_at type="datetime">2011-10-25T12:00:00Z</created_at>
  <updated_at type="datetime">2015-03-30T12:00:00Z</updated_at>
  <closed_at nil="nil"></closed_at>
  <has_live_subscription type="boolean">true</has_live_subscription>
</account>"#;

/// An account list document with one entry per code.
pub fn accounts_xml(codes: &[&str]) -> String {
    let items: String = codes
        .iter()
        .map(|code| format!("<account><account_code>{code}</account_code></account>"))
        .collect();
    format!(r#"<accounts type="array">{items}</accounts>"#)
}
