//! Notification shapes.
//!
//! Every notification carries the account it concerns. The remaining payload
//! depends on the family the root tag belongs to.

use serde::Deserialize;

use recurly_core::{Account, GatewayResult, NullBool, NullInt, NullTime, Subscription};

/// A decoded webhook notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Account lifecycle and billing info events.
    Account(AccountNotification),
    /// Subscription lifecycle events.
    Subscription(SubscriptionNotification),
    /// Invoice events in the pre-credit-invoice schema.
    Invoice(InvoiceNotification<LegacyInvoice>),
    /// Charge invoice events.
    ChargeInvoice(InvoiceNotification<ChargeInvoice>),
    /// Credit invoice events.
    CreditInvoice(InvoiceNotification<CreditInvoice>),
    /// Payment and refund outcomes.
    Payment(PaymentNotification),
    /// Credit applied to or voided from an invoice.
    CreditPayment(CreditPaymentNotification),
    /// Dunning event against a charge invoice.
    Dunning(DunningNotification<ChargeInvoice>),
    /// Dunning event in the pre-credit-invoice schema.
    LegacyDunning(DunningNotification<LegacyInvoice>),
}

impl Notification {
    /// The root tag the notification was decoded from.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Account(n) => &n.kind,
            Self::Subscription(n) => &n.kind,
            Self::Invoice(n) => &n.kind,
            Self::ChargeInvoice(n) => &n.kind,
            Self::CreditInvoice(n) => &n.kind,
            Self::Payment(n) => &n.kind,
            Self::CreditPayment(n) => &n.kind,
            Self::Dunning(n) => &n.kind,
            Self::LegacyDunning(n) => &n.kind,
        }
    }

    /// The account snapshot.
    #[must_use]
    pub fn account(&self) -> &Account {
        match self {
            Self::Account(n) => &n.account,
            Self::Subscription(n) => &n.account,
            Self::Invoice(n) => &n.account,
            Self::ChargeInvoice(n) => &n.account,
            Self::CreditInvoice(n) => &n.account,
            Self::Payment(n) => &n.account,
            Self::CreditPayment(n) => &n.account,
            Self::Dunning(n) => &n.account,
            Self::LegacyDunning(n) => &n.account,
        }
    }
}

/// Sets the tag name after decoding; the root tag is not part of the payload.
pub(crate) trait Tagged {
    fn set_kind(&mut self, kind: &str);
}

/// `new_account_notification`, `billing_info_updated_notification`, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AccountNotification {
    /// Root tag.
    #[serde(skip)]
    pub kind: String,
    /// Account snapshot.
    #[serde(default)]
    pub account: Account,
}

/// `new_subscription_notification`, `renewed_subscription_notification`, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubscriptionNotification {
    /// Root tag.
    #[serde(skip)]
    pub kind: String,
    /// Account snapshot.
    #[serde(default)]
    pub account: Account,
    /// Subscription snapshot.
    #[serde(default)]
    pub subscription: Subscription,
}

/// Invoice events, generic over the invoice schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InvoiceNotification<I> {
    /// Root tag.
    #[serde(skip)]
    pub kind: String,
    /// Account snapshot.
    #[serde(default)]
    pub account: Account,
    /// Invoice snapshot.
    pub invoice: I,
}

/// `successful_payment_notification`, `failed_payment_notification`, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentNotification {
    /// Root tag.
    #[serde(skip)]
    pub kind: String,
    /// Account snapshot.
    #[serde(default)]
    pub account: Account,
    /// Transaction snapshot.
    #[serde(default)]
    pub transaction: Transaction,
}

/// `new_credit_payment_notification`, `voided_credit_payment_notification`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreditPaymentNotification {
    /// Root tag.
    #[serde(skip)]
    pub kind: String,
    /// Account snapshot.
    #[serde(default)]
    pub account: Account,
    /// Credit payment snapshot.
    #[serde(default)]
    pub credit_payment: CreditPayment,
}

/// `new_dunning_event_notification`, generic over the invoice schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DunningNotification<I> {
    /// Root tag.
    #[serde(skip)]
    pub kind: String,
    /// Account snapshot.
    #[serde(default)]
    pub account: Account,
    /// Subscription being dunned.
    #[serde(default)]
    pub subscription: Subscription,
    /// Past-due invoice.
    pub invoice: I,
    /// Most recent failed transaction, if any.
    #[serde(default)]
    pub transaction: Transaction,
}

impl Tagged for AccountNotification {
    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

impl Tagged for SubscriptionNotification {
    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

impl<I> Tagged for InvoiceNotification<I> {
    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

impl Tagged for PaymentNotification {
    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

impl Tagged for CreditPaymentNotification {
    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

impl<I> Tagged for DunningNotification<I> {
    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

/// Transaction as embedded in webhooks. Related resources are referenced by
/// id rather than by link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transaction {
    /// Transaction UUID.
    #[serde(default)]
    pub id: String,
    /// Invoice UUID.
    #[serde(default)]
    pub invoice_id: String,
    /// Invoice number prefix.
    #[serde(default)]
    pub invoice_number_prefix: String,
    /// Invoice number.
    #[serde(default)]
    pub invoice_number: NullInt,
    /// Subscription UUID.
    #[serde(default)]
    pub subscription_id: String,
    /// `purchase`, `verify`, `refund`.
    #[serde(default)]
    pub action: String,
    /// When the transaction happened.
    #[serde(default)]
    pub date: NullTime,
    /// Amount in minor units.
    #[serde(default)]
    pub amount_in_cents: NullInt,
    /// `success`, `declined`, `void`, ...
    #[serde(default)]
    pub status: String,
    /// Gateway message.
    #[serde(default)]
    pub message: String,
    /// Gateway error code, on failure.
    #[serde(default)]
    pub gateway_error_codes: String,
    /// Failure category, e.g. `soft` or `hard`.
    #[serde(default)]
    pub failure_type: String,
    /// Gateway reference.
    #[serde(default)]
    pub reference: String,
    /// `subscription`, `transaction`, `billing_info`, ...
    #[serde(default)]
    pub source: String,
    /// CVV check.
    #[serde(default)]
    pub cvv_result: GatewayResult,
    /// Address check.
    #[serde(default)]
    pub avs_result: GatewayResult,
    /// Whether the gateway is in test mode.
    #[serde(default)]
    pub test: NullBool,
    /// Whether the transaction can be voided.
    #[serde(default)]
    pub voidable: NullBool,
    /// Whether the transaction can be refunded.
    #[serde(default)]
    pub refundable: NullBool,
    /// Whether this was a manually entered payment.
    #[serde(default)]
    pub manually_entered: NullBool,
    /// Payment method, e.g. `credit_card`.
    #[serde(default)]
    pub payment_method: String,
}

/// Invoice snapshot from before credit invoices existed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LegacyInvoice {
    /// Invoice UUID.
    #[serde(default)]
    pub uuid: String,
    /// Subscription UUID, if the invoice was for a subscription.
    #[serde(default)]
    pub subscription_id: String,
    /// `open`, `collected`, `failed`, `past_due`.
    #[serde(default)]
    pub state: String,
    /// Invoice number prefix.
    #[serde(default)]
    pub invoice_number_prefix: String,
    /// Invoice number.
    #[serde(default)]
    pub invoice_number: NullInt,
    /// Purchase order number.
    #[serde(default)]
    pub po_number: String,
    /// VAT number.
    #[serde(default)]
    pub vat_number: String,
    /// Total in minor units.
    #[serde(default)]
    pub total_in_cents: NullInt,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Invoice date.
    #[serde(default)]
    pub date: NullTime,
    /// When the invoice was closed.
    #[serde(default)]
    pub closed_at: NullTime,
    /// Payment terms in days.
    #[serde(default)]
    pub net_terms: NullInt,
    /// `automatic` or `manual`.
    #[serde(default)]
    pub collection_method: String,
}

/// `<subscription_ids type="array">` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscriptionIds {
    /// Subscription UUIDs in document order.
    #[serde(rename = "subscription_id", default)]
    pub ids: Vec<String>,
}

/// Charge invoice snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChargeInvoice {
    /// Invoice UUID.
    #[serde(default)]
    pub uuid: String,
    /// `pending`, `processing`, `past_due`, `paid`, `failed`.
    #[serde(default)]
    pub state: String,
    /// What created the invoice, e.g. `renewal`.
    #[serde(default)]
    pub origin: String,
    /// Subscriptions billed on the invoice.
    #[serde(default)]
    pub subscription_ids: SubscriptionIds,
    /// Invoice number prefix.
    #[serde(default)]
    pub invoice_number_prefix: String,
    /// Invoice number.
    #[serde(default)]
    pub invoice_number: NullInt,
    /// Purchase order number.
    #[serde(default)]
    pub po_number: String,
    /// VAT number.
    #[serde(default)]
    pub vat_number: String,
    /// Outstanding balance in minor units.
    #[serde(default)]
    pub balance_in_cents: NullInt,
    /// Total in minor units.
    #[serde(default)]
    pub total_in_cents: NullInt,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// When the invoice was created.
    #[serde(default)]
    pub created_at: NullTime,
    /// When the invoice was last updated.
    #[serde(default)]
    pub updated_at: NullTime,
    /// When the invoice was closed.
    #[serde(default)]
    pub closed_at: NullTime,
    /// When payment is due.
    #[serde(default)]
    pub due_on: NullTime,
    /// Payment terms in days.
    #[serde(default)]
    pub net_terms: NullInt,
    /// `automatic` or `manual`.
    #[serde(default)]
    pub collection_method: String,
    /// Dunning campaign count for the invoice.
    #[serde(default)]
    pub dunning_events_count: NullInt,
    /// Whether this is the final dunning event.
    #[serde(default)]
    pub final_dunning_event: NullBool,
}

/// Credit invoice snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreditInvoice {
    /// Invoice UUID.
    #[serde(default)]
    pub uuid: String,
    /// `open`, `processing`, `closed`, `voided`.
    #[serde(default)]
    pub state: String,
    /// What created the credit, e.g. `refund`.
    #[serde(default)]
    pub origin: String,
    /// Subscriptions the credit relates to.
    #[serde(default)]
    pub subscription_ids: SubscriptionIds,
    /// Invoice number prefix.
    #[serde(default)]
    pub invoice_number_prefix: String,
    /// Invoice number.
    #[serde(default)]
    pub invoice_number: NullInt,
    /// Remaining credit in minor units.
    #[serde(default)]
    pub balance_in_cents: NullInt,
    /// Total in minor units.
    #[serde(default)]
    pub total_in_cents: NullInt,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// When the credit was created.
    #[serde(default)]
    pub created_at: NullTime,
    /// When the credit was last updated.
    #[serde(default)]
    pub updated_at: NullTime,
    /// When the credit was closed.
    #[serde(default)]
    pub closed_at: NullTime,
}

/// Credit payment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreditPayment {
    /// Credit payment UUID.
    #[serde(default)]
    pub uuid: String,
    /// `payment`, `gift_card`, `refund`, `reduction`, `write_off`.
    #[serde(default)]
    pub action: String,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Amount in minor units.
    #[serde(default)]
    pub amount_in_cents: NullInt,
    /// Credit invoice the payment came from.
    #[serde(default)]
    pub original_invoice_number: NullInt,
    /// Charge invoice the payment was applied to.
    #[serde(default)]
    pub applied_to_invoice_number: NullInt,
    /// Credit payment this one reverses, if any.
    #[serde(default)]
    pub original_credit_payment_uuid: String,
    /// Refund transaction, for refunds.
    #[serde(default)]
    pub refund_transaction_uuid: String,
    /// When the credit was applied.
    #[serde(default)]
    pub created_at: NullTime,
    /// When the credit was voided.
    #[serde(default)]
    pub voided_at: NullTime,
}
