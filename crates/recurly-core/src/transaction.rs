//! Transaction types.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::href::Href;
use crate::null::{NullBool, NullInt, NullTime, Nullable};

/// A payment, refund, or verification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transaction {
    /// Account charged.
    #[serde(default)]
    pub account: Href,
    /// Invoice the transaction paid.
    #[serde(default)]
    pub invoice: Href,
    /// Subscription the transaction relates to.
    #[serde(default)]
    pub subscription: Href,
    /// Transaction UUID.
    #[serde(default)]
    pub uuid: String,
    /// `purchase`, `refund`, or `verify`.
    #[serde(default)]
    pub action: String,
    /// Amount in minor units.
    #[serde(default)]
    pub amount_in_cents: NullInt,
    /// Tax portion in minor units.
    #[serde(default)]
    pub tax_in_cents: NullInt,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// `success`, `failed`, `void`, `declined`.
    #[serde(default)]
    pub status: String,
    /// `credit_card`, `paypal`, `check`, ...
    #[serde(default)]
    pub payment_method: String,
    /// Gateway reference.
    #[serde(default)]
    pub reference: String,
    /// `subscription`, `transaction`, `billing_info`, ...
    #[serde(default)]
    pub source: String,
    /// Whether the charge came from a renewal.
    #[serde(default)]
    pub recurring: NullBool,
    /// Whether this is a test transaction.
    #[serde(default)]
    pub test: NullBool,
    /// Whether the transaction can still be voided.
    #[serde(default)]
    pub voidable: NullBool,
    /// Whether the transaction can be refunded.
    #[serde(default)]
    pub refundable: NullBool,
    /// Customer IP address.
    #[serde(default)]
    pub ip_address: String,
    /// Card security code check.
    #[serde(default)]
    pub cvv_result: GatewayResult,
    /// Address verification check.
    #[serde(default)]
    pub avs_result: GatewayResult,
    /// Creation time.
    #[serde(default)]
    pub created_at: NullTime,
    /// Gateway failure details, present on declined transactions.
    #[serde(default)]
    pub transaction_error: Option<TransactionError>,
}

/// A gateway check such as `<cvv_result code="M">Match</cvv_result>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GatewayResult {
    /// Result code.
    #[serde(rename = "@code", default)]
    pub code: String,
    /// Human-readable result.
    #[serde(rename = "$text", default)]
    pub message: String,
}

/// Structured gateway failure for a declined transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionError {
    /// Machine-readable error code, e.g. `declined`.
    #[serde(default)]
    pub error_code: String,
    /// `soft`, `hard`, `fraud`, ...
    #[serde(default)]
    pub error_category: String,
    /// Message for the merchant.
    #[serde(default)]
    pub merchant_message: String,
    /// Message safe to show the customer.
    #[serde(default)]
    pub customer_message: String,
    /// Raw gateway error code.
    #[serde(default)]
    pub gateway_error_code: String,
}

/// Body for creating a one-off transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "transaction")]
pub struct NewTransaction {
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount_in_cents: NullInt,
    /// Currency code.
    pub currency: String,
    /// Account to charge, with billing info for a new account.
    pub account: Account,
    /// Description shown on the invoice.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Accounting code.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub accounting_code: String,
}
