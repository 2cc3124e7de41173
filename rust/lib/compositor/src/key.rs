//! Namespaced content identifiers (`namespace:value`).

use std::fmt;
use std::str::FromStr;

use crate::error::CompositorError;

/// A catalog identifier such as `minecraft:oak_log`.
///
/// Keys are only ever read from a catalog; the compositor concatenates their
/// parts but never invents new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    namespace: String,
    value: String,
}

impl TypeKey {
    /// Build a key from its parts, validating both against the
    /// resource-location grammar.
    pub fn new(namespace: &str, value: &str) -> Result<Self, CompositorError> {
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(CompositorError::InvalidKey(format!(
                "bad namespace {:?}",
                namespace
            )));
        }
        if value.is_empty() || !value.chars().all(is_value_char) {
            return Err(CompositorError::InvalidKey(format!(
                "bad value {:?}",
                value
            )));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            value: value.to_string(),
        })
    }

    /// Parse `namespace:value`. The namespace is mandatory.
    pub fn parse(s: &str) -> Result<Self, CompositorError> {
        let (namespace, value) = s
            .split_once(':')
            .ok_or_else(|| CompositorError::InvalidKey(format!("missing namespace in {:?}", s)))?;
        Self::new(namespace, value)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn as_string(&self) -> String {
        format!("{}:{}", self.namespace, self.value)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for TypeKey {
    type Err = CompositorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

pub(crate) fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

// Values additionally allow `/` for nested paths.
fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}
