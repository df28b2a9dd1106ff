//! Read-only links to related resources.

use serde::{Deserialize, Deserializer};

/// A link such as `<account href="https://example.recurly.com/v2/accounts/100"/>`.
///
/// The identifier is the last path segment of the link. `Href` intentionally has no
/// `Serialize` impl: the API does not accept links as input, so a serializable
/// struct holding one must mark the field `skip_serializing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Href {
    link: String,
    code: String,
}

impl Href {
    /// Build from a full link.
    #[must_use]
    pub fn new(link: impl Into<String>) -> Self {
        let link = link.into();
        let code = last_segment(&link).to_string();
        Self { link, code }
    }

    /// The full link.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// The identifier or code extracted from the link.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// True when no link was present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }
}

fn last_segment(link: &str) -> &str {
    match link.rfind('/') {
        Some(idx) => &link[idx + 1..],
        None => link,
    }
}

#[derive(Deserialize)]
struct Element {
    #[serde(rename = "@href", default)]
    href: String,
}

impl<'de> Deserialize<'de> for Href {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Element::deserialize(deserializer).map(|element| Self::new(element.href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{from_xml, to_xml};
    use serde::Serialize;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename = "invoice")]
    struct Holder {
        #[serde(default)]
        uuid: String,
        #[serde(default, skip_serializing)]
        account: Href,
    }

    #[test]
    fn extracts_last_segment() {
        let href = Href::new("https://your-subdomain.recurly.com/v2/accounts/100");
        assert_eq!(href.code(), "100");
        assert_eq!(href.link(), "https://your-subdomain.recurly.com/v2/accounts/100");
    }

    #[test]
    fn decodes_from_attribute() {
        let xml = br#"<invoice><uuid>abc</uuid><account href="https://x.recurly.com/v2/accounts/1"/></invoice>"#;
        let holder: Holder = from_xml(xml).unwrap();
        assert_eq!(holder.account.code(), "1");
        assert!(!holder.account.is_empty());
    }

    #[test]
    fn missing_link_is_empty() {
        let holder: Holder = from_xml(b"<invoice><uuid>abc</uuid></invoice>").unwrap();
        assert_eq!(holder.account, Href::default());
        assert_eq!(holder.account.code(), "");
    }

    #[test]
    fn never_encoded() {
        let holder = Holder {
            uuid: "abc".into(),
            account: Href::new("https://x.recurly.com/v2/accounts/1"),
        };
        let xml = to_xml(&holder).unwrap();
        assert!(!xml.contains("account"));
        assert!(!xml.contains("href"));
    }
}
