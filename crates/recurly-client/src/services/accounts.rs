//! Account operations.

use recurly_core::Account;

use super::{call, call_empty, segment};
use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::pager::Pager;
use crate::request::Params;
use crate::response::Response;

/// Account operations, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    client: &'a Client,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Page through accounts. Filters such as `state` go in `params`.
    #[must_use]
    pub fn list(&self, params: Params) -> Pager<'a, Account> {
        Pager::new(self.client, "accounts", params)
    }

    /// Look up an account by code.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn get(&self, code: &str) -> Result<(Response, Option<Account>), Error> {
        let path = format!("accounts/{}", segment(code));
        call(self.client, "GET", &path, &Params::new(), NO_BODY).await
    }

    /// Create an account, optionally with billing info.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn create(&self, account: &Account) -> Result<(Response, Option<Account>), Error> {
        call(self.client, "POST", "accounts", &Params::new(), Some(account)).await
    }

    /// Update an account. Only present fields are sent.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn update(
        &self,
        code: &str,
        account: &Account,
    ) -> Result<(Response, Option<Account>), Error> {
        let path = format!("accounts/{}", segment(code));
        call(self.client, "PUT", &path, &Params::new(), Some(account)).await
    }

    /// Close an account, canceling its subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn close(&self, code: &str) -> Result<Response, Error> {
        let path = format!("accounts/{}", segment(code));
        call_empty(self.client, "DELETE", &path, &Params::new()).await
    }

    /// Reopen a closed account.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn reopen(&self, code: &str) -> Result<(Response, Option<Account>), Error> {
        let path = format!("accounts/{}/reopen", segment(code));
        call(self.client, "PUT", &path, &Params::new(), NO_BODY).await
    }
}
