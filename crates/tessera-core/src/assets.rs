//! Stylesheet and script registration.
//!
//! Renderers declare the assets they need; the hosting application collects
//! them once at startup through
//! [`Registry::register_assets`](crate::Registry::register_assets) and links
//! them into its pages. Registering the same asset twice is a no-op.

/// An ordered, duplicate-free set of asset names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    assets: Vec<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`. Returns `true` if it was not already present.
    pub fn register(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        tracing::debug!(asset = name, "registered asset");
        self.assets.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.iter().any(|a| a == name)
    }

    /// Assets in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
