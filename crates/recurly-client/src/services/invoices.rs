//! Invoice operations.

use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use recurly_core::Invoice;

use super::{call, segment};
use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::pager::Pager;
use crate::request::Params;
use crate::response::Response;

/// Invoice operations, borrowed from a [`Client`].
///
/// Invoices are addressed by number, including any prefix (e.g. `TX1001`).
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    client: &'a Client,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Page through all invoices.
    #[must_use]
    pub fn list(&self, params: Params) -> Pager<'a, Invoice> {
        Pager::new(self.client, "invoices", params)
    }

    /// Page through one account's invoices.
    #[must_use]
    pub fn list_for_account(&self, account_code: &str, params: Params) -> Pager<'a, Invoice> {
        let path = format!("accounts/{}/invoices", segment(account_code));
        Pager::new(self.client, path, params)
    }

    /// Look up an invoice.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn get(&self, number: &str) -> Result<(Response, Option<Invoice>), Error> {
        let path = format!("invoices/{}", segment(number));
        call(self.client, "GET", &path, &Params::new(), NO_BODY).await
    }

    /// Download an invoice as PDF bytes, rendered in `language` (e.g. `en-US`).
    ///
    /// # Errors
    ///
    /// Returns an error if `language` is not a valid header value, or on
    /// transport failure.
    pub async fn get_pdf(
        &self,
        number: &str,
        language: &str,
    ) -> Result<(Response, Option<Vec<u8>>), Error> {
        let path = format!("invoices/{}", segment(number));
        let mut request = self
            .client
            .new_request("GET", &path, &Params::new(), NO_BODY)?;
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/pdf"));
        if !language.is_empty() {
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(language)?);
        }
        self.client.send_raw(request).await
    }

    /// Attempt to collect a past-due invoice with the account's billing info.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn collect(&self, number: &str) -> Result<(Response, Option<Invoice>), Error> {
        let path = format!("invoices/{}/collect", segment(number));
        call(self.client, "PUT", &path, &Params::new(), NO_BODY).await
    }

    /// Mark an invoice as paid outside the gateway.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn mark_paid(&self, number: &str) -> Result<(Response, Option<Invoice>), Error> {
        let path = format!("invoices/{}/mark_successful", segment(number));
        call(self.client, "PUT", &path, &Params::new(), NO_BODY).await
    }
}
