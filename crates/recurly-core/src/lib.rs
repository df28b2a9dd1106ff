//! Core types for the Recurly v2 API client.
//!
//! This crate provides the XML data model shared by the client and webhook crates:
//!
//! - **Nullable values**: `NullInt`, `NullBool`, `NullTime` distinguish "absent" from "zero"
//! - **Money**: `UnitAmount`, a multi-currency amount in minor units
//! - **Links**: `Href`, a read-only reference to a related resource
//! - **Resources**: `Account`, `Subscription`, `Invoice`, `Transaction`, `Coupon`
//!
//! # Partial updates
//!
//! The API applies only the elements present in a request body. A field that was
//! never set must not appear on the wire, while a field explicitly set to `false`
//! or `0` must. Nullable fields therefore carry presence separately from value and
//! are annotated with `skip_serializing_if = "Nullable::is_absent"`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod coupon;
pub mod error;
pub mod href;
pub mod invoice;
pub mod money;
pub mod null;
pub mod subscription;
pub mod transaction;
pub mod xml;

pub use account::{Account, Address, BillingInfo};
pub use coupon::{Coupon, PlanCodes};
pub use error::ScalarError;
pub use href::Href;
pub use invoice::{Adjustment, Invoice, LineItems};
pub use money::UnitAmount;
pub use null::{NullBool, NullInt, NullTime, Nullable, XmlScalar};
pub use subscription::{NewSubscription, Subscription, SubscriptionPlan, UpdateSubscription};
pub use transaction::{GatewayResult, NewTransaction, Transaction, TransactionError};
pub use xml::{from_xml, to_xml, List, DATETIME_FORMAT};
