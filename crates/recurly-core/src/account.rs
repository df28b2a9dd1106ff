//! Account types.
//!
//! An account is addressed by its `account_code`. Reads never carry billing
//! info; it is written only when creating or updating an account.

use serde::{Deserialize, Serialize};

use crate::null::{NullBool, NullInt, NullTime, Nullable};

/// A customer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "account")]
pub struct Account {
    /// Unique account code chosen by the merchant.
    #[serde(rename = "account_code", default, skip_serializing_if = "String::is_empty")]
    pub code: String,

    /// `active` or `closed`. Read-only.
    #[serde(default, skip_serializing)]
    pub state: String,

    /// Username.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// Email address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// Additional comma-separated email recipients.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cc_emails: String,

    /// First name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    /// Last name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    /// Company name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_name: String,

    /// VAT number.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_number: String,

    /// Whether the account is exempt from tax.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub tax_exempt: NullBool,

    /// Preferred language, e.g. `en-US`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub accept_language: String,

    /// Postal address.
    #[serde(default, skip_serializing_if = "Address::is_empty")]
    pub address: Address,

    /// Billing info, sent on create/update only. Never populated by a read.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,

    /// Token for the hosted account management page. Read-only.
    #[serde(default, skip_serializing)]
    pub hosted_login_token: String,

    /// Whether the account has a live subscription. Read-only.
    #[serde(default, skip_serializing)]
    pub has_live_subscription: NullBool,

    /// When the account was created. Read-only.
    #[serde(default, skip_serializing)]
    pub created_at: NullTime,

    /// When the account was last updated. Read-only.
    #[serde(default, skip_serializing)]
    pub updated_at: NullTime,

    /// When the account was closed. Read-only.
    #[serde(default, skip_serializing)]
    pub closed_at: NullTime,
}

impl Account {
    /// An account with only its code set.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Whether the account is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == "closed"
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First street line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address1: String,
    /// Second street line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address2: String,
    /// City.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    /// State or province.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    /// Postal code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    /// Two-letter country code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
}

impl Address {
    /// True when every line is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Payment details attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "billing_info")]
pub struct BillingInfo {
    /// Token from the hosted payment fields; replaces raw card data when set.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_id: String,
    /// Cardholder first name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    /// Cardholder last name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// Billing street line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address1: String,
    /// Billing city.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    /// Billing state.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    /// Billing postal code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    /// Billing country.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    /// Card number (write-only).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,
    /// Expiration month.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub month: NullInt,
    /// Expiration year.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub year: NullInt,
    /// Card security code (write-only).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub verification_value: String,
    /// Customer IP address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{from_xml, to_xml};

    #[test]
    fn read_ignores_billing_info_link() {
        let xml = br#"<account href="https://x.recurly.com/v2/accounts/1">
  <billing_info href="https://x.recurly.com/v2/accounts/1/billing_info"/>
  <account_code>1</account_code>
  <state>closed</state>
  <tax_exempt type="boolean">false</tax_exempt>
</account>"#;
        let account: Account = from_xml(xml).unwrap();
        assert_eq!(account.code, "1");
        assert!(account.is_closed());
        assert!(account.billing_info.is_none());
        assert_eq!(account.tax_exempt, NullBool::new(false));
    }

    #[test]
    fn partial_update_body() {
        let account = Account {
            email: "new@example.com".into(),
            tax_exempt: NullBool::new(false),
            ..Account::default()
        };
        let xml = to_xml(&account).unwrap();
        assert!(xml.starts_with("<account>"));
        assert!(xml.contains("<email>new@example.com</email>"));
        assert!(xml.contains("<tax_exempt>false</tax_exempt>"));
        assert!(!xml.contains("first_name"));
        assert!(!xml.contains("address"));
        assert!(!xml.contains("created_at"));
    }

    #[test]
    fn create_body_embeds_billing_info() {
        let account = Account {
            billing_info: Some(BillingInfo {
                token_id: "tok_123".into(),
                ..BillingInfo::default()
            }),
            ..Account::new("abc")
        };
        let xml = to_xml(&account).unwrap();
        assert!(xml.contains("<account_code>abc</account_code>"));
        assert!(xml.contains("<billing_info><token_id>tok_123</token_id></billing_info>"));
    }
}
