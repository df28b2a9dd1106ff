//! Subscription operations.

use chrono::{DateTime, Utc};

use recurly_core::{NewSubscription, Subscription, UpdateSubscription, DATETIME_FORMAT};

use super::{call, sanitize_uuid, segment};
use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::pager::Pager;
use crate::request::Params;
use crate::response::Response;

/// How much of the current period to refund on termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refund {
    /// Refund the last charge in full.
    Full,
    /// Refund the unused part of the current period.
    Partial,
    /// No refund.
    None,
}

impl Refund {
    fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }
}

/// Subscription operations, borrowed from a [`Client`].
///
/// UUIDs may be given with or without dashes, in any case.
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a Client,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Page through all subscriptions.
    #[must_use]
    pub fn list(&self, params: Params) -> Pager<'a, Subscription> {
        Pager::new(self.client, "subscriptions", params)
    }

    /// Page through one account's subscriptions.
    #[must_use]
    pub fn list_for_account(&self, account_code: &str, params: Params) -> Pager<'a, Subscription> {
        let path = format!("accounts/{}/subscriptions", segment(account_code));
        Pager::new(self.client, path, params)
    }

    /// Look up a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn get(&self, uuid: &str) -> Result<(Response, Option<Subscription>), Error> {
        let path = subscription_path(uuid, None);
        self.call_subscription("GET", &path, &Params::new()).await
    }

    /// Create a subscription, and its account if the code is new.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn create(
        &self,
        subscription: &NewSubscription,
    ) -> Result<(Response, Option<Subscription>), Error> {
        call(self.client, "POST", "subscriptions", &Params::new(), Some(subscription)).await
    }

    /// Change plan, quantity, or price.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn update(
        &self,
        uuid: &str,
        change: &UpdateSubscription,
    ) -> Result<(Response, Option<Subscription>), Error> {
        let path = subscription_path(uuid, None);
        call(self.client, "PUT", &path, &Params::new(), Some(change)).await
    }

    /// Cancel at the end of the current period.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn cancel(&self, uuid: &str) -> Result<(Response, Option<Subscription>), Error> {
        let path = subscription_path(uuid, Some("cancel"));
        self.call_subscription("PUT", &path, &Params::new()).await
    }

    /// Undo a pending cancellation.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn reactivate(&self, uuid: &str) -> Result<(Response, Option<Subscription>), Error> {
        let path = subscription_path(uuid, Some("reactivate"));
        self.call_subscription("PUT", &path, &Params::new()).await
    }

    /// End the subscription immediately.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn terminate(
        &self,
        uuid: &str,
        refund: Refund,
    ) -> Result<(Response, Option<Subscription>), Error> {
        let params = Params::new().with("refund", refund.as_str());
        let path = subscription_path(uuid, Some("terminate"));
        self.call_subscription("PUT", &path, &params).await
    }

    /// Move the next renewal to `next_renewal_date`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn postpone(
        &self,
        uuid: &str,
        next_renewal_date: DateTime<Utc>,
    ) -> Result<(Response, Option<Subscription>), Error> {
        let params = Params::new().with(
            "next_renewal_date",
            next_renewal_date.format(DATETIME_FORMAT),
        );
        let path = subscription_path(uuid, Some("postpone"));
        self.call_subscription("PUT", &path, &params).await
    }

    async fn call_subscription(
        &self,
        method: &str,
        path: &str,
        params: &Params,
    ) -> Result<(Response, Option<Subscription>), Error> {
        call(self.client, method, path, params, NO_BODY).await
    }
}

fn subscription_path(uuid: &str, action: Option<&str>) -> String {
    let uuid = sanitize_uuid(uuid);
    match action {
        Some(action) => format!("subscriptions/{}/{action}", segment(&uuid)),
        None => format!("subscriptions/{}", segment(&uuid)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_values() {
        assert_eq!(Refund::Full.as_str(), "full");
        assert_eq!(Refund::Partial.as_str(), "partial");
        assert_eq!(Refund::None.as_str(), "none");
    }

    #[test]
    fn paths_use_sanitized_uuid() {
        assert_eq!(
            subscription_path("44F83D7C-DDF7", None),
            "subscriptions/44f83d7cddf7"
        );
        assert_eq!(
            subscription_path("abc", Some("cancel")),
            "subscriptions/abc/cancel"
        );
    }
}
