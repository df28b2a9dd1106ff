//! Multi-currency amounts.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::null::NullInt;

/// An amount in minor units per currency, e.g.
/// `<unit_amount_in_cents><USD>1000</USD><EUR>800</EUR></unit_amount_in_cents>`.
///
/// Only positive amounts are encoded; a value with none is treated as empty and
/// should be omitted with `skip_serializing_if = "UnitAmount::is_empty"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitAmount(BTreeMap<String, i64>);

impl UnitAmount {
    /// An empty amount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`UnitAmount::set`].
    #[must_use]
    pub fn with(mut self, currency: impl Into<String>, amount: i64) -> Self {
        self.set(currency, amount);
        self
    }

    /// Set the amount for a currency.
    pub fn set(&mut self, currency: impl Into<String>, amount: i64) {
        self.0.insert(currency.into(), amount);
    }

    /// Amount for a currency, if any.
    #[must_use]
    pub fn get(&self, currency: &str) -> Option<i64> {
        self.0.get(currency).copied()
    }

    /// True when no currency carries a positive amount.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.0.values().any(|amount| *amount > 0)
    }

    /// Iterate over `(currency, amount)` pairs in currency order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(currency, amount)| (currency.as_str(), *amount))
    }
}

impl Serialize for UnitAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().filter(|(_, amount)| **amount > 0))
    }
}

struct UnitAmountVisitor;

impl<'de> Visitor<'de> for UnitAmountVisitor {
    type Value = UnitAmount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("currency elements")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut amounts = BTreeMap::new();
        while let Some(key) = map.next_key::<String>()? {
            // Attributes and stray text are not currencies.
            if key.starts_with('@') || key.starts_with('$') {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            if let Some(amount) = map.next_value::<NullInt>()?.into_option() {
                amounts.insert(key, amount);
            }
        }
        Ok(UnitAmount(amounts))
    }
}

impl<'de> Deserialize<'de> for UnitAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UnitAmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{from_xml, to_xml};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename = "plan")]
    struct Plan {
        #[serde(default, skip_serializing_if = "UnitAmount::is_empty")]
        unit_amount_in_cents: UnitAmount,
    }

    #[test]
    fn encodes_positive_amounts_only() {
        let plan = Plan {
            unit_amount_in_cents: UnitAmount::new().with("USD", 1000).with("EUR", 0),
        };
        let xml = to_xml(&plan).unwrap();
        assert!(xml.contains("<USD>1000</USD>"));
        assert!(!xml.contains("EUR"));
    }

    #[test]
    fn omitted_when_empty() {
        let plan = Plan {
            unit_amount_in_cents: UnitAmount::new().with("USD", 0),
        };
        assert!(plan.unit_amount_in_cents.is_empty());
        assert!(!to_xml(&plan).unwrap().contains("unit_amount_in_cents"));
    }

    #[test]
    fn decodes_each_currency() {
        let xml = br#"<plan>
  <unit_amount_in_cents>
    <USD type="integer">1500</USD>
    <EUR type="integer">1200</EUR>
  </unit_amount_in_cents>
</plan>"#;
        let plan: Plan = from_xml(xml).unwrap();
        assert_eq!(plan.unit_amount_in_cents.get("USD"), Some(1500));
        assert_eq!(plan.unit_amount_in_cents.get("EUR"), Some(1200));
        assert_eq!(plan.unit_amount_in_cents.get("GBP"), None);
        assert_eq!(plan.unit_amount_in_cents.iter().count(), 2);
    }

    #[test]
    fn round_trip_drops_non_positive_amounts() {
        let plan = Plan {
            unit_amount_in_cents: UnitAmount::new().with("USD", 1500).with("EUR", 0),
        };
        let decoded: Plan = from_xml(to_xml(&plan).unwrap().as_bytes()).unwrap();
        assert_eq!(decoded.unit_amount_in_cents.get("USD"), Some(1500));
        assert_eq!(decoded.unit_amount_in_cents.get("EUR"), None);
        assert_ne!(decoded, plan);
        assert_eq!(
            decoded.unit_amount_in_cents,
            UnitAmount::new().with("USD", 1500)
        );
    }

    #[test]
    fn decode_keeps_zero_and_negative_amounts() {
        let xml = br#"<plan>
  <unit_amount_in_cents>
    <USD type="integer">0</USD>
    <EUR type="integer">-250</EUR>
    <GBP nil="nil"></GBP>
  </unit_amount_in_cents>
</plan>"#;
        let plan: Plan = from_xml(xml).unwrap();
        assert_eq!(plan.unit_amount_in_cents.get("USD"), Some(0));
        assert_eq!(plan.unit_amount_in_cents.get("EUR"), Some(-250));
        assert_eq!(plan.unit_amount_in_cents.get("GBP"), None);
        assert!(plan.unit_amount_in_cents.is_empty());

        // Neither survives a re-encode.
        assert!(!to_xml(&plan).unwrap().contains("unit_amount_in_cents"));
    }
}
