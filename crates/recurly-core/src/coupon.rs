//! Coupon types.

use serde::{Deserialize, Serialize};

use crate::money::UnitAmount;
use crate::null::{NullBool, NullInt, NullTime, Nullable};

/// A coupon. Serves both as the read shape and the create/update body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "coupon")]
pub struct Coupon {
    /// Unique coupon code.
    #[serde(rename = "coupon_code", default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// `redeemable`, `expired`, `maxed_out`, `inactive`. Read-only.
    #[serde(default, skip_serializing)]
    pub state: String,
    /// Description shown to customers.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `percent`, `dollars`, or `free_trial`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discount_type: String,
    /// Percentage off, for `percent` coupons.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub discount_percent: NullInt,
    /// Amount off per currency, for `dollars` coupons.
    #[serde(default, skip_serializing_if = "UnitAmount::is_empty")]
    pub discount_in_cents: UnitAmount,
    /// Last date the coupon can be redeemed.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub redeem_by_date: NullTime,
    /// Whether the coupon expires after one use.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub single_use: NullBool,
    /// Number of months the discount applies for.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applies_for_months: NullInt,
    /// Maximum total redemptions.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub max_redemptions: NullInt,
    /// Whether the coupon applies to every plan.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applies_to_all_plans: NullBool,
    /// Whether the coupon applies to one-time charges.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applies_to_non_plan_charges: NullBool,
    /// `single_use`, `temporal`, or `forever`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,
    /// `day`, `week`, `month`, `year`, for temporal coupons.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub temporal_unit: String,
    /// Number of units, for temporal coupons.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub temporal_amount: NullInt,
    /// Plans the coupon is restricted to.
    #[serde(default, skip_serializing_if = "PlanCodes::is_empty")]
    pub plan_codes: PlanCodes,
    /// Creation time. Read-only.
    #[serde(default, skip_serializing)]
    pub created_at: NullTime,
}

/// `<plan_codes type="array"><plan_code>gold</plan_code></plan_codes>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCodes {
    /// Plan codes.
    #[serde(rename = "plan_code", default)]
    pub codes: Vec<String>,
}

impl PlanCodes {
    /// True when the coupon is not restricted to specific plans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
