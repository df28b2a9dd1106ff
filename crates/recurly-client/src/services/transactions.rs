//! Transaction operations.

use recurly_core::{NewTransaction, Transaction};

use super::{call, call_empty, sanitize_uuid, segment};
use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::pager::Pager;
use crate::request::Params;
use crate::response::Response;

/// Transaction operations, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a Client,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Page through all transactions.
    #[must_use]
    pub fn list(&self, params: Params) -> Pager<'a, Transaction> {
        Pager::new(self.client, "transactions", params)
    }

    /// Page through one account's transactions.
    #[must_use]
    pub fn list_for_account(&self, account_code: &str, params: Params) -> Pager<'a, Transaction> {
        let path = format!("accounts/{}/transactions", segment(account_code));
        Pager::new(self.client, path, params)
    }

    /// Look up a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn get(&self, uuid: &str) -> Result<(Response, Option<Transaction>), Error> {
        let path = format!("transactions/{}", segment(&sanitize_uuid(uuid)));
        call(self.client, "GET", &path, &Params::new(), NO_BODY).await
    }

    /// Charge an account once.
    ///
    /// A declined charge comes back as a 422 whose
    /// [`Response::transaction_error`] explains the decline.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn create(
        &self,
        transaction: &NewTransaction,
    ) -> Result<(Response, Option<Transaction>), Error> {
        call(self.client, "POST", "transactions", &Params::new(), Some(transaction)).await
    }

    /// Void or refund a transaction. `None` refunds the full amount.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn refund(
        &self,
        uuid: &str,
        amount_in_cents: Option<i64>,
    ) -> Result<Response, Error> {
        let path = format!("transactions/{}", segment(&sanitize_uuid(uuid)));
        let mut params = Params::new();
        if let Some(amount) = amount_in_cents {
            params.insert("amount_in_cents", amount);
        }
        call_empty(self.client, "DELETE", &path, &params).await
    }
}
