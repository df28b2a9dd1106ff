//! Nullable scalar values.
//!
//! `Nullable<T>` records whether a field was present, independently of its value.
//! An absent value encodes to nothing; a present value encodes even when it is the
//! zero value of `T`, because the API reads "absent" as "leave unchanged" and
//! "present zero" as "set to zero".

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScalarError;
use crate::xml::DATETIME_FORMAT;

/// A scalar that is carried as element text.
pub trait XmlScalar: Sized {
    /// Format the value as element text.
    fn to_xml_text(&self) -> String;

    /// Parse element text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a valid representation of `Self`.
    fn from_xml_text(text: &str) -> Result<Self, ScalarError>;

    /// Value of an element that is present but has no text, e.g. `<count/>`.
    fn empty() -> Self;
}

impl XmlScalar for i64 {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }

    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        text.parse()
            .map_err(|_| ScalarError::InvalidInt(text.to_string()))
    }

    fn empty() -> Self {
        0
    }
}

impl XmlScalar for bool {
    fn to_xml_text(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }

    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        match text {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ScalarError::InvalidBool(text.to_string())),
        }
    }

    fn empty() -> Self {
        false
    }
}

impl XmlScalar for DateTime<Utc> {
    fn to_xml_text(&self) -> String {
        self.format(DATETIME_FORMAT).to_string()
    }

    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        DateTime::parse_from_rfc3339(text)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| ScalarError::InvalidTime(text.to_string()))
    }

    fn empty() -> Self {
        Self::default()
    }
}

/// A value that may be absent from the wire payload.
///
/// Two values are equal when both are absent, or both are present with equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullable<T>(Option<T>);

/// Nullable integer.
pub type NullInt = Nullable<i64>;

/// Nullable boolean.
pub type NullBool = Nullable<bool>;

/// Nullable UTC timestamp.
pub type NullTime = Nullable<DateTime<Utc>>;

impl<T> Nullable<T> {
    /// A present value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// An absent value.
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }

    /// Whether the value was set.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the value was left unset. Used with `skip_serializing_if`.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the value if present.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Convert into an `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T: Default + Clone> Nullable<T> {
    /// The value, or the zero value of `T` when absent.
    #[must_use]
    pub fn value(&self) -> T {
        self.0.clone().unwrap_or_default()
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: XmlScalar> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => serializer.serialize_str(&value.to_xml_text()),
            None => serializer.serialize_none(),
        }
    }
}

/// Raw element shape: optional `nil` marker plus text content.
#[derive(Deserialize)]
struct Element {
    #[serde(rename = "@nil", default)]
    nil: Option<String>,
    #[serde(rename = "$text", default)]
    text: Option<String>,
}

impl<'de, T: XmlScalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let element = Element::deserialize(deserializer)?;
        // A nil marker reads as absent, not as an explicit null.
        if element.nil.is_some() {
            return Ok(Self(None));
        }
        match element.text.as_deref().map(str::trim) {
            None | Some("") => Ok(Self(Some(T::empty()))),
            Some(text) => T::from_xml_text(text)
                .map(|value| Self(Some(value)))
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{from_xml, to_xml};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename = "fields")]
    struct Fields {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        flag: NullBool,
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        count: NullInt,
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        at: NullTime,
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn constructors() {
        assert!(NullInt::new(0).is_present());
        assert!(NullInt::default().is_absent());
        assert_eq!(NullInt::default().value(), 0);
        assert_eq!(NullBool::new(true).get(), Some(&true));
        assert_eq!(NullInt::from(Some(5)), NullInt::new(5));
    }

    #[test]
    fn equality_considers_presence() {
        assert_ne!(NullInt::new(0), NullInt::default());
        assert_ne!(NullBool::new(false), NullBool::absent());
        assert_eq!(NullInt::absent(), NullInt::default());
        assert_eq!(NullInt::new(7), NullInt::new(7));
        assert_ne!(NullInt::new(7), NullInt::new(8));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let xml = to_xml(&Fields::default()).unwrap();
        assert!(!xml.contains("flag"));
        assert!(!xml.contains("count"));
        assert!(!xml.contains("<at"));
    }

    #[test]
    fn zero_values_are_encoded() {
        let fields = Fields {
            flag: NullBool::new(false),
            count: NullInt::new(0),
            at: NullTime::absent(),
        };
        let xml = to_xml(&fields).unwrap();
        assert!(xml.contains("<flag>false</flag>"));
        assert!(xml.contains("<count>0</count>"));
    }

    #[test]
    fn time_uses_utc_profile() {
        let fields = Fields {
            at: NullTime::new(noon()),
            ..Fields::default()
        };
        let xml = to_xml(&fields).unwrap();
        assert!(xml.contains("<at>2024-03-01T12:30:00Z</at>"));
    }

    #[test]
    fn round_trip() {
        let fields = Fields {
            flag: NullBool::new(true),
            count: NullInt::new(-42),
            at: NullTime::new(noon()),
        };
        let decoded: Fields = from_xml(to_xml(&fields).unwrap().as_bytes()).unwrap();
        assert_eq!(decoded, fields);
    }

    #[test]
    fn absent_elements_decode_as_absent() {
        let decoded: Fields = from_xml(b"<fields></fields>").unwrap();
        assert_eq!(decoded, Fields::default());
    }

    #[test]
    fn typed_elements_decode() {
        let xml = br#"<fields>
  <flag type="boolean">false</flag>
  <count type="integer">0</count>
  <at type="datetime">2024-03-01T14:30:00+02:00</at>
</fields>"#;
        let decoded: Fields = from_xml(xml).unwrap();
        assert_eq!(decoded.flag, NullBool::new(false));
        assert_eq!(decoded.count, NullInt::new(0));
        assert_eq!(decoded.at, NullTime::new(noon()));
    }

    #[test]
    fn nil_marker_decodes_as_absent() {
        let xml = br#"<fields><flag nil="nil"></flag><count nil="true"/><at type="datetime" nil="nil"/></fields>"#;
        let decoded: Fields = from_xml(xml).unwrap();
        assert_eq!(decoded, Fields::default());
    }

    #[test]
    fn empty_elements_are_present_with_zero_value() {
        let xml = br#"<fields><flag></flag><count/><at type="datetime"></at></fields>"#;
        let decoded: Fields = from_xml(xml).unwrap();
        assert!(decoded.flag.is_present());
        assert_eq!(decoded.flag.get(), Some(&false));
        assert!(decoded.count.is_present());
        assert_eq!(decoded.count.get(), Some(&0));
        assert!(decoded.at.is_present());
        assert_eq!(decoded.at.value(), DateTime::<Utc>::default());
    }

    #[test]
    fn malformed_value_is_an_error() {
        let result: Result<Fields, _> = from_xml(b"<fields><count>ten</count></fields>");
        assert!(result.is_err());
        let result: Result<Fields, _> = from_xml(b"<fields><flag>yes</flag></fields>");
        assert!(result.is_err());
    }
}
