//! Absent-safe access to route template variables

use std::collections::HashMap;

/// Read-only view over the path parameters bound by the gateway's route
/// template.
///
/// The gateway serializes an event with no bound variables as either a
/// missing `pathParameters` member or an explicit JSON `null`; both
/// deserialize to an empty map, so callers always hold a usable value and
/// lookups answer with `None` instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParameters(HashMap<String, String>);

impl PathParameters {
    /// Return the value bound to the named template variable, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Return true if the route template bound no variables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of bound template variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the bound `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl From<HashMap<String, String>> for PathParameters {
    fn from(inner: HashMap<String, String>) -> Self {
        PathParameters(inner)
    }
}
