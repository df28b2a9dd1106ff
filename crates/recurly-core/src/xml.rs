//! XML encode/decode helpers.

use quick_xml::DeError;
use quick_xml::SeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Output profile for timestamps sent to the API (always UTC).
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Serialize a resource to an XML document.
///
/// The root element is the type's serde name, e.g. `#[serde(rename = "account")]`.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as XML.
pub fn to_xml<T: Serialize>(value: &T) -> Result<String, SeError> {
    quick_xml::se::to_string(value)
}

/// Deserialize an XML document. The root element name is not checked.
///
/// # Errors
///
/// Returns an error if the document is malformed or does not match `T`.
pub fn from_xml<T: DeserializeOwned>(xml: &[u8]) -> Result<T, DeError> {
    quick_xml::de::from_reader(xml)
}

/// A collection response, e.g. `<accounts type="array"><account/>...</accounts>`.
///
/// Child element names are not checked, so one wrapper serves every resource.
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    /// Items in document order.
    #[serde(rename = "$value", default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> List<T> {
    /// Consume the wrapper and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
