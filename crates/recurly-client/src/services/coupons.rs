//! Coupon operations.

use recurly_core::Coupon;

use super::{call, call_empty, segment};
use crate::client::{Client, NO_BODY};
use crate::error::Error;
use crate::pager::Pager;
use crate::request::Params;
use crate::response::Response;

/// Coupon operations, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Coupons<'a> {
    client: &'a Client,
}

impl<'a> Coupons<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Page through coupons.
    #[must_use]
    pub fn list(&self, params: Params) -> Pager<'a, Coupon> {
        Pager::new(self.client, "coupons", params)
    }

    /// Look up a coupon by code.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure.
    pub async fn get(&self, code: &str) -> Result<(Response, Option<Coupon>), Error> {
        let path = format!("coupons/{}", segment(code));
        call(self.client, "GET", &path, &Params::new(), NO_BODY).await
    }

    /// Create a coupon.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn create(&self, coupon: &Coupon) -> Result<(Response, Option<Coupon>), Error> {
        call(self.client, "POST", "coupons", &Params::new(), Some(coupon)).await
    }

    /// Edit a coupon's redemption limits or description.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn update(
        &self,
        code: &str,
        coupon: &Coupon,
    ) -> Result<(Response, Option<Coupon>), Error> {
        let path = format!("coupons/{}", segment(code));
        call(self.client, "PUT", &path, &Params::new(), Some(coupon)).await
    }

    /// Deactivate a coupon.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn delete(&self, code: &str) -> Result<Response, Error> {
        let path = format!("coupons/{}", segment(code));
        call_empty(self.client, "DELETE", &path, &Params::new()).await
    }

    /// Reactivate an expired or deleted coupon, applying `coupon` as edits.
    ///
    /// # Errors
    ///
    /// Returns an error on encode, transport, or decode failure.
    pub async fn restore(
        &self,
        code: &str,
        coupon: &Coupon,
    ) -> Result<(Response, Option<Coupon>), Error> {
        let path = format!("coupons/{}/restore", segment(code));
        call(self.client, "PUT", &path, &Params::new(), Some(coupon)).await
    }
}
