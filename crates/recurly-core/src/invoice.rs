//! Invoice types.

use serde::Deserialize;

use crate::href::Href;
use crate::null::{NullInt, NullTime};
use crate::transaction::Transaction;

/// An invoice as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Invoice {
    /// Billed account.
    #[serde(default)]
    pub account: Href,
    /// Invoice UUID.
    #[serde(default)]
    pub uuid: String,
    /// `pending`, `processing`, `past_due`, `paid`, `failed`, ...
    #[serde(default)]
    pub state: String,
    /// `charge`, `credit`, or `legacy`.
    #[serde(rename = "type", default)]
    pub invoice_type: String,
    /// `purchase`, `renewal`, `refund`, ...
    #[serde(default)]
    pub origin: String,
    /// Sequential invoice number.
    #[serde(default)]
    pub invoice_number: NullInt,
    /// Prefix applied to the number, e.g. for credit invoices.
    #[serde(default)]
    pub invoice_number_prefix: String,
    /// Purchase order number.
    #[serde(default)]
    pub po_number: String,
    /// VAT number.
    #[serde(default)]
    pub vat_number: String,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Subtotal in minor units.
    #[serde(default)]
    pub subtotal_in_cents: NullInt,
    /// Tax in minor units.
    #[serde(default)]
    pub tax_in_cents: NullInt,
    /// Total in minor units.
    #[serde(default)]
    pub total_in_cents: NullInt,
    /// Outstanding balance in minor units.
    #[serde(default)]
    pub balance_in_cents: NullInt,
    /// Net terms in days.
    #[serde(default)]
    pub net_terms: NullInt,
    /// `automatic` or `manual`.
    #[serde(default)]
    pub collection_method: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: NullTime,
    /// Last update time.
    #[serde(default)]
    pub updated_at: NullTime,
    /// When the invoice was paid or failed.
    #[serde(default)]
    pub closed_at: NullTime,
    /// Charges and credits on the invoice.
    #[serde(default)]
    pub line_items: LineItems,
    /// Payments against the invoice.
    #[serde(default)]
    pub transactions: Transactions,
}

impl Invoice {
    /// The invoice number including its prefix, e.g. `CR1001`.
    #[must_use]
    pub fn display_number(&self) -> String {
        format!("{}{}", self.invoice_number_prefix, self.invoice_number.value())
    }
}

/// `<line_items type="array">` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LineItems {
    /// Adjustments in document order.
    #[serde(rename = "adjustment", default)]
    pub adjustments: Vec<Adjustment>,
}

/// `<transactions type="array">` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transactions {
    /// Transactions in document order.
    #[serde(rename = "transaction", default)]
    pub transactions: Vec<Transaction>,
}

/// A charge or credit line on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Adjustment {
    /// Adjustment UUID.
    #[serde(default)]
    pub uuid: String,
    /// `pending` or `invoiced`.
    #[serde(default)]
    pub state: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Accounting code.
    #[serde(default)]
    pub accounting_code: String,
    /// Unit price in minor units.
    #[serde(default)]
    pub unit_amount_in_cents: NullInt,
    /// Quantity.
    #[serde(default)]
    pub quantity: NullInt,
    /// Total in minor units.
    #[serde(default)]
    pub total_in_cents: NullInt,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Service period start.
    #[serde(default)]
    pub start_date: NullTime,
    /// Service period end.
    #[serde(default)]
    pub end_date: NullTime,
    /// Creation time.
    #[serde(default)]
    pub created_at: NullTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::from_xml;

    #[test]
    fn decodes_invoice_with_line_items() {
        let xml = br#"<invoice href="https://x.recurly.com/v2/invoices/1005">
  <account href="https://x.recurly.com/v2/accounts/1"/>
  <uuid>421f7b7d414e4c6792938e7c49d552e9</uuid>
  <state>paid</state>
  <type>charge</type>
  <invoice_number_prefix></invoice_number_prefix>
  <invoice_number type="integer">1005</invoice_number>
  <currency>USD</currency>
  <subtotal_in_cents type="integer">1200</subtotal_in_cents>
  <tax_in_cents type="integer">0</tax_in_cents>
  <total_in_cents type="integer">1200</total_in_cents>
  <created_at type="datetime">2011-08-25T12:00:00Z</created_at>
  <closed_at nil="nil"></closed_at>
  <line_items type="array">
    <adjustment href="https://x.recurly.com/v2/adjustments/626db120">
      <uuid>626db120a84102b1809909071c701c60</uuid>
      <description>Charge for extra bandwidth</description>
      <unit_amount_in_cents type="integer">1200</unit_amount_in_cents>
      <quantity type="integer">1</quantity>
      <total_in_cents type="integer">1200</total_in_cents>
      <currency>USD</currency>
    </adjustment>
  </line_items>
  <transactions type="array">
  </transactions>
</invoice>"#;
        let invoice: Invoice = from_xml(xml).unwrap();
        assert_eq!(invoice.account.code(), "1");
        assert_eq!(invoice.invoice_type, "charge");
        assert_eq!(invoice.display_number(), "1005");
        assert_eq!(invoice.tax_in_cents, NullInt::new(0));
        assert!(invoice.closed_at.is_absent());
        assert_eq!(invoice.line_items.adjustments.len(), 1);
        assert_eq!(
            invoice.line_items.adjustments[0].description,
            "Charge for extra bandwidth"
        );
        assert!(invoice.transactions.transactions.is_empty());
    }
}
