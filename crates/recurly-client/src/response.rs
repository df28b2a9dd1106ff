//! Response envelope.
//!
//! A [`Response`] owns the status, headers, and fully-read body of a reply.
//! Status classification, validation errors, and pagination cursors are all
//! derived from those three parts, so a `Response` can be built and inspected
//! without a network.

use quick_xml::DeError;
use reqwest::header::{HeaderMap, LINK};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use recurly_core::{from_xml, TransactionError};

/// A field-level rejection from a 422 reply,
/// e.g. `<error field="account.email" symbol="invalid_email">is invalid</error>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationError {
    /// Dotted field path, e.g. `subscription.account.email`.
    #[serde(rename = "@field", default)]
    pub field: String,
    /// Machine-readable reason, e.g. `invalid_email`.
    #[serde(rename = "@symbol", default)]
    pub symbol: String,
    /// Human-readable message.
    #[serde(rename = "$text", default)]
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorsDocument {
    #[serde(rename = "error", default)]
    errors: Vec<ValidationError>,
}

#[derive(Deserialize)]
struct TransactionErrorDocument {
    #[serde(default)]
    transaction_error: Option<TransactionError>,
}

/// A reply from the API.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    errors: Vec<ValidationError>,
    transaction_error: Option<TransactionError>,
}

impl Response {
    /// Wrap a reply. Validation errors are extracted only for 422.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        let (errors, transaction_error) = if status == StatusCode::UNPROCESSABLE_ENTITY {
            (
                decode_validation_errors(&body),
                decode_transaction_error(&body),
            )
        } else {
            (Vec::new(), None)
        };

        Self {
            status,
            headers,
            body,
            errors,
            transaction_error,
        }
    }

    /// HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Reply headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Validation errors; empty unless the status is 422.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Gateway failure details from a declined transaction, if present.
    #[must_use]
    pub fn transaction_error(&self) -> Option<&TransactionError> {
        self.transaction_error.as_ref()
    }

    /// 2xx.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }

    /// Anything other than 2xx.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// 4xx.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// 5xx.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Cursor for the next page, from the `Link` header entry with `rel="next"`.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        link_cursor(&self.headers, "next")
    }

    /// Cursor for the previous page, from the `Link` header entry with `rel="prev"`.
    #[must_use]
    pub fn prev_cursor(&self) -> Option<String> {
        link_cursor(&self.headers, "prev")
    }

    /// Total record count from `X-Records`, sent with list and HEAD replies.
    #[must_use]
    pub fn records(&self) -> Option<u64> {
        self.headers
            .get("x-records")?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }

    /// Decode the body. Returns `Ok(None)` for error statuses and empty bodies.
    ///
    /// # Errors
    ///
    /// Returns an error if a successful body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, DeError> {
        if self.is_error() || self.body.is_empty() {
            return Ok(None);
        }
        from_xml(&self.body).map(Some)
    }
}

fn decode_validation_errors(body: &[u8]) -> Vec<ValidationError> {
    match from_xml::<ErrorsDocument>(body) {
        Ok(doc) => doc.errors,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode validation errors");
            Vec::new()
        }
    }
}

// The transaction block is supplementary; failing to read it must not hide the
// field errors.
fn decode_transaction_error(body: &[u8]) -> Option<TransactionError> {
    match from_xml::<TransactionErrorDocument>(body) {
        Ok(doc) => doc.transaction_error,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode transaction error");
            None
        }
    }
}

/// Find the `cursor` query parameter of the `Link` entry tagged `rel`.
///
/// Entries look like `<https://x.recurly.com/v2/accounts?cursor=123>; rel="next"`
/// and are comma-separated.
fn link_cursor(headers: &HeaderMap, rel: &str) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|entry| {
            let (target, attrs) = entry.trim().split_once(';')?;
            let matches = attrs.split(';').any(|attr| {
                attr.trim()
                    .strip_prefix("rel=")
                    .is_some_and(|value| value.trim_matches('"') == rel)
            });
            if !matches {
                return None;
            }
            let url = target.trim().strip_prefix('<')?.strip_suffix('>')?;
            let (_, query) = url.split_once('?')?;
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| *key == "cursor")
                .map(|(_, value)| value.into_owned())
        })
}
