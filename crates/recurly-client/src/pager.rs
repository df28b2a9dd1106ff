//! Cursor-driven pagination.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use recurly_core::List;

use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::request::Params;
use crate::response::Response;

/// Iterates a list endpoint one page at a time.
///
/// The cursor returned by each page is echoed back verbatim on the next
/// request. `fetch` takes `&mut self`, so pages are always fetched in order.
#[derive(Debug)]
pub struct Pager<'a, T> {
    client: &'a Client,
    path: String,
    params: Params,
    cursor: Option<String>,
    done: bool,
    marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Pager<'a, T> {
    pub(crate) fn new(client: &'a Client, path: impl Into<String>, params: Params) -> Self {
        Self {
            client,
            path: path.into(),
            params,
            cursor: None,
            done: false,
            marker: PhantomData,
        }
    }

    /// Request `n` records per page.
    #[must_use]
    pub fn per_page(mut self, n: u32) -> Self {
        self.params.insert("per_page", n);
        self
    }

    /// True until a page comes back empty or without a next cursor.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.done
    }

    /// Cursor the next fetch will send, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Fetch the next page.
    ///
    /// Returns an empty page once the pager is exhausted, without a request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] if the server replies with an error status, or
    /// any transport or decode error. The cursor is left unchanged on error.
    pub async fn fetch(&mut self) -> Result<Vec<T>, Error> {
        if self.done {
            return Ok(Vec::new());
        }

        let mut params = self.params.clone();
        if let Some(cursor) = &self.cursor {
            params.insert("cursor", cursor);
        }

        let request = self.client.new_request("GET", &self.path, &params, NO_BODY)?;
        let (response, list) = self.client.send::<List<T>>(request).await?;
        if response.is_error() {
            return Err(status_error(response));
        }

        let items = list.map(List::into_items).unwrap_or_default();
        self.cursor = response.next_cursor();
        self.done = items.is_empty() || self.cursor.is_none();

        tracing::debug!(
            path = %self.path,
            items = items.len(),
            has_more = !self.done,
            "Fetched page"
        );
        Ok(items)
    }

    /// Fetch every remaining page and concatenate them.
    ///
    /// # Errors
    ///
    /// See [`Pager::fetch`].
    pub async fn fetch_all(&mut self) -> Result<Vec<T>, Error> {
        let mut all = Vec::new();
        while self.has_more() {
            all.extend(self.fetch().await?);
        }
        Ok(all)
    }

    /// Total number of records matching the filters, without fetching them.
    ///
    /// Issues a HEAD request and reads `X-Records`; 0 when the header is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] on an error status, or any transport error.
    pub async fn count(&self) -> Result<u64, Error> {
        let request = self
            .client
            .new_request("HEAD", &self.path, &self.params, NO_BODY)?;
        let response = self.client.execute(request).await?;
        if response.is_error() {
            return Err(status_error(response));
        }
        Ok(response.records().unwrap_or(0))
    }
}

fn status_error(response: Response) -> Error {
    Error::Status {
        response: Box::new(response),
    }
}
