//! Recurly v2 webhook notifications.
//!
//! A notification is an XML document whose root tag names the event, e.g.
//! `<successful_payment_notification>`. [`parse`] reads the root tag, looks it up
//! in a fixed table, and decodes the document into the matching [`Notification`]
//! variant. Payloads are point-in-time snapshots, not live resources.
//!
//! Verifying that a delivery really came from Recurly (HTTP basic auth or IP
//! allow-listing on the receiving endpoint) is up to the caller.
//!
//! # Example
//!
//! ```
//! use recurly_webhooks::{parse, Notification};
//!
//! let xml = br#"<new_account_notification>
//!   <account><account_code>1</account_code></account>
//! </new_account_notification>"#;
//!
//! let notification = parse(xml).unwrap();
//! assert_eq!(notification.kind(), "new_account_notification");
//! assert!(matches!(notification, Notification::Account(_)));
//! assert_eq!(notification.account().code, "1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dispatch;
mod error;
pub mod notification;

pub use dispatch::{parse, parse_with, Schema};
pub use error::WebhookError;
pub use notification::{
    AccountNotification, ChargeInvoice, CreditInvoice, CreditPayment, CreditPaymentNotification,
    DunningNotification, InvoiceNotification, LegacyInvoice, Notification, PaymentNotification,
    SubscriptionNotification, Transaction,
};
