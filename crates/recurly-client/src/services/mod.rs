//! Resource services.
//!
//! Each service is a thin borrower of [`Client`] that maps resource operations
//! onto paths and verbs. Obtain them from the client, e.g. [`Client::accounts`].

mod accounts;
mod coupons;
mod invoices;
mod subscriptions;
mod transactions;

pub use accounts::Accounts;
pub use coupons::Coupons;
pub use invoices::Invoices;
pub use subscriptions::{Refund, Subscriptions};
pub use transactions::Transactions;

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::request::Params;
use crate::response::Response;

/// Percent-encode an identifier for use as one path segment.
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Strip dashes and lowercase, the form the API uses in paths.
fn sanitize_uuid(uuid: &str) -> String {
    uuid.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

async fn call<T: DeserializeOwned, B: Serialize>(
    client: &Client,
    method: &str,
    path: &str,
    params: &Params,
    body: Option<&B>,
) -> Result<(Response, Option<T>), Error> {
    let request = client.new_request(method, path, params, body)?;
    client.send(request).await
}

async fn call_empty(
    client: &Client,
    method: &str,
    path: &str,
    params: &Params,
) -> Result<Response, Error> {
    let request = client.new_request(method, path, params, NO_BODY)?;
    client.execute(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_are_sanitized() {
        assert_eq!(
            sanitize_uuid("44F83D7C-dDF7-4C2E-8E2B-CB2A5D8BDD5D"),
            "44f83d7cddf74c2e8e2bcb2a5d8bdd5d"
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(segment("plain-code_1"), "plain-code_1");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
