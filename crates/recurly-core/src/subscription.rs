//! Subscription types.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::href::Href;
use crate::null::{NullBool, NullInt, NullTime, Nullable};

/// A subscription as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Subscription {
    /// Owning account.
    #[serde(default)]
    pub account: Href,
    /// Invoice the subscription was last billed on.
    #[serde(default)]
    pub invoice: Href,
    /// Plan snapshot.
    #[serde(default)]
    pub plan: SubscriptionPlan,
    /// Subscription UUID.
    #[serde(default)]
    pub uuid: String,
    /// `active`, `canceled`, `expired`, `future`, `in_trial`, `live`, `paused`.
    #[serde(default)]
    pub state: String,
    /// Price per unit in minor units.
    #[serde(default)]
    pub unit_amount_in_cents: NullInt,
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Number of units.
    #[serde(default)]
    pub quantity: NullInt,
    /// Total including add-ons, in minor units.
    #[serde(default)]
    pub total_amount_in_cents: NullInt,
    /// Tax for the current period, in minor units.
    #[serde(default)]
    pub tax_in_cents: NullInt,
    /// When the subscription became active.
    #[serde(default)]
    pub activated_at: NullTime,
    /// When the subscription was canceled.
    #[serde(default)]
    pub canceled_at: NullTime,
    /// When the subscription expires or expired.
    #[serde(default)]
    pub expires_at: NullTime,
    /// Start of the current billing period.
    #[serde(default)]
    pub current_period_started_at: NullTime,
    /// End of the current billing period.
    #[serde(default)]
    pub current_period_ends_at: NullTime,
    /// Trial start.
    #[serde(default)]
    pub trial_started_at: NullTime,
    /// Trial end.
    #[serde(default)]
    pub trial_ends_at: NullTime,
    /// Remaining billing cycles, if limited.
    #[serde(default)]
    pub remaining_billing_cycles: NullInt,
    /// `automatic` or `manual`.
    #[serde(default)]
    pub collection_method: String,
    /// Net terms for manual collection, in days.
    #[serde(default)]
    pub net_terms: NullInt,
    /// Purchase order number.
    #[serde(default)]
    pub po_number: String,
}

impl Subscription {
    /// Whether the subscription is currently billing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state.as_str(), "active" | "in_trial" | "live")
    }
}

/// Plan snapshot embedded in a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscriptionPlan {
    /// Plan code.
    #[serde(default)]
    pub plan_code: String,
    /// Plan display name.
    #[serde(default)]
    pub name: String,
}

/// Body for creating a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "subscription")]
pub struct NewSubscription {
    /// Plan code to subscribe to.
    pub plan_code: String,
    /// Account to subscribe; created if the code is new.
    pub account: Account,
    /// Currency code.
    pub currency: String,
    /// Override the plan's unit price.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub unit_amount_in_cents: NullInt,
    /// Number of units.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub quantity: NullInt,
    /// Coupon to redeem.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub coupon_code: String,
    /// Defer the start of the subscription.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub starts_at: NullTime,
    /// Override the trial end.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub trial_ends_at: NullTime,
    /// Limit the number of billing cycles.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub total_billing_cycles: NullInt,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub collection_method: String,
    /// Net terms for manual collection, in days.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub net_terms: NullInt,
    /// Purchase order number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub po_number: String,
    /// Allow multiple subscriptions to the same plan.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bulk: NullBool,
}

/// Body for updating a subscription. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "subscription")]
pub struct UpdateSubscription {
    /// `now` or `renewal`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeframe: String,
    /// New plan code.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan_code: String,
    /// New quantity.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub quantity: NullInt,
    /// New unit price.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub unit_amount_in_cents: NullInt,
    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub collection_method: String,
    /// Net terms for manual collection, in days.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub net_terms: NullInt,
    /// Purchase order number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub po_number: String,
}
