//! Tunnel identifiers
//!
//! Identifiers are assigned by whoever registers the tunnel; the registry only
//! compares them.

use std::borrow::Borrow;

/// Unique identifier for a tunnel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TunnelId(String);

impl TunnelId {
    /// Create a new tunnel id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TunnelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TunnelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TunnelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets the map be queried with a plain `&str`.
impl Borrow<str> for TunnelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
