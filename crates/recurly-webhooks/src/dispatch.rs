//! Root-tag dispatch.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

use recurly_core::from_xml;

use crate::error::WebhookError;
use crate::notification::{Notification, Tagged};

/// Which invoice schema the sending site uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schema {
    /// Charge and credit invoices.
    #[default]
    Current,
    /// Single invoice type, from before credit invoices.
    Legacy,
}

type Decoder = fn(&[u8], &str) -> Result<Notification, WebhookError>;

const COMMON: &[(&str, Decoder)] = &[
    ("new_account_notification", account),
    ("updated_account_notification", account),
    ("canceled_account_notification", account),
    ("billing_info_updated_notification", account),
    ("billing_info_update_failed_notification", account),
    ("reactivated_account_notification", subscription),
    ("new_subscription_notification", subscription),
    ("updated_subscription_notification", subscription),
    ("renewed_subscription_notification", subscription),
    ("expired_subscription_notification", subscription),
    ("canceled_subscription_notification", subscription),
    ("paused_subscription_renewal_notification", subscription),
    ("subscription_paused_notification", subscription),
    ("subscription_resumed_notification", subscription),
    ("scheduled_subscription_pause_notification", subscription),
    ("subscription_pause_modified_notification", subscription),
    ("subscription_pause_canceled_notification", subscription),
    ("successful_payment_notification", payment),
    ("failed_payment_notification", payment),
    ("void_payment_notification", payment),
    ("successful_refund_notification", payment),
    ("scheduled_payment_notification", payment),
    ("processing_payment_notification", payment),
    ("new_credit_payment_notification", credit_payment),
    ("voided_credit_payment_notification", credit_payment),
];

const CURRENT: &[(&str, Decoder)] = &[
    ("new_charge_invoice_notification", charge_invoice),
    ("processing_charge_invoice_notification", charge_invoice),
    ("past_due_charge_invoice_notification", charge_invoice),
    ("paid_charge_invoice_notification", charge_invoice),
    ("failed_charge_invoice_notification", charge_invoice),
    ("reopened_charge_invoice_notification", charge_invoice),
    ("new_credit_invoice_notification", credit_invoice),
    ("processing_credit_invoice_notification", credit_invoice),
    ("closed_credit_invoice_notification", credit_invoice),
    ("voided_credit_invoice_notification", credit_invoice),
    ("reopened_credit_invoice_notification", credit_invoice),
    ("open_credit_invoice_notification", credit_invoice),
    ("new_dunning_event_notification", dunning),
];

const LEGACY: &[(&str, Decoder)] = &[
    ("new_invoice_notification", legacy_invoice),
    ("past_due_invoice_notification", legacy_invoice),
    ("closed_invoice_notification", legacy_invoice),
    ("processing_invoice_notification", legacy_invoice),
    ("new_dunning_event_notification", legacy_dunning),
];

impl Schema {
    fn table(self) -> &'static [(&'static str, Decoder)] {
        match self {
            Self::Current => CURRENT,
            Self::Legacy => LEGACY,
        }
    }

    fn lookup(self, name: &str) -> Option<Decoder> {
        COMMON
            .iter()
            .chain(self.table())
            .find(|(tag, _)| *tag == name)
            .map(|(_, decoder)| *decoder)
    }
}

/// Decode a notification using the current invoice schema.
///
/// # Errors
///
/// Returns [`WebhookError::UnknownNotification`] for an unrecognized root tag, or
/// an XML or decode error for a malformed document.
pub fn parse(xml: &[u8]) -> Result<Notification, WebhookError> {
    parse_with(xml, Schema::Current)
}

/// Decode a notification using the given invoice schema.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with(xml: &[u8], schema: Schema) -> Result<Notification, WebhookError> {
    let name = root_name(xml)?;
    let Some(decoder) = schema.lookup(&name) else {
        tracing::warn!(name = %name, ?schema, "Unknown webhook notification");
        return Err(WebhookError::UnknownNotification { name });
    };

    tracing::debug!(name = %name, ?schema, "Decoding webhook notification");
    decoder(xml, &name)
}

/// Name of the first element, skipping the declaration and comments.
fn root_name(xml: &[u8]) -> Result<String, WebhookError> {
    let mut reader = Reader::from_reader(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Eof => return Err(WebhookError::MissingRoot),
            _ => {}
        }
    }
}

fn decode<P: DeserializeOwned + Tagged>(
    xml: &[u8],
    kind: &str,
    wrap: fn(P) -> Notification,
) -> Result<Notification, WebhookError> {
    let mut payload: P = from_xml(xml)?;
    payload.set_kind(kind);
    Ok(wrap(payload))
}

fn account(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::Account)
}

fn subscription(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::Subscription)
}

fn payment(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::Payment)
}

fn credit_payment(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::CreditPayment)
}

fn charge_invoice(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::ChargeInvoice)
}

fn credit_invoice(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::CreditInvoice)
}

fn legacy_invoice(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::Invoice)
}

fn dunning(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::Dunning)
}

fn legacy_dunning(xml: &[u8], kind: &str) -> Result<Notification, WebhookError> {
    decode(xml, kind, Notification::LegacyDunning)
}
