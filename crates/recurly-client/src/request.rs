//! Query parameters.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Query parameters for a request.
///
/// Values are stringified with their `Display` impl, so structured values
/// (nested maps, lists) have no defined encoding; pass scalars only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(pub(crate) BTreeMap<String, String>);

impl Params {
    /// Empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
