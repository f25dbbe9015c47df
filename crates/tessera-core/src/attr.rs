//! Declared component configuration with per-kind fallbacks.
//!
//! An [`Attributes`] store holds what the author declared on a component.
//! Reads that miss fall through to a static [`Fallback`] table supplied by
//! the component's kind, so an unset `interval` on a carousel still reads as
//! `5000` without the author having to write it.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A declared attribute value.
///
/// Deserializes from untyped scalars, so `true`, `42` and `"hover"` in a
/// declarative description land as [`Bool`](Value::Bool),
/// [`Int`](Value::Int) and [`Text`](Value::Text) respectively.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag such as `disabled`.
    Bool(bool),
    /// An integer such as `activeIndex` or `interval`.
    Int(i64),
    /// Free text such as `style` or `styleClass`.
    Text(String),
}

impl Value {
    /// Read the value as a flag. `"true"` (any case) counts as set.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(n) => Some(*n != 0),
            Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }

    /// Read the value as an integer, parsing text when needed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Bool(_) => None,
        }
    }

    /// Render the value the way it appears in an attribute.
    pub fn to_text(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// A documented default, resolvable without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Bool(bool),
    Int(i64),
    Text(&'static str),
}

impl Fallback {
    fn to_value(self) -> Value {
        match self {
            Fallback::Bool(b) => Value::Bool(b),
            Fallback::Int(n) => Value::Int(n),
            Fallback::Text(s) => Value::Text(s.to_string()),
        }
    }
}

/// Table of `(name, default)` pairs consulted when a name is unset.
pub type Fallbacks = &'static [(&'static str, Fallback)];

/// Defaults shared by every component: everything renders unless told not to.
pub const COMMON_FALLBACKS: Fallbacks = &[
    (names::RENDERED, Fallback::Bool(true)),
    (names::DISABLED, Fallback::Bool(false)),
];

/// Attribute names used across the core and the widgets.
pub mod names {
    pub const STYLE: &str = "style";
    pub const STYLE_CLASS: &str = "styleClass";
    pub const DISABLED: &str = "disabled";
    pub const RENDERED: &str = "rendered";
    pub const TOOLTIP: &str = "tooltip";
    pub const TOOLTIP_POSITION: &str = "tooltipPosition";
    pub const TOOLTIP_DELAY: &str = "tooltipDelay";
    pub const VALUE: &str = "value";
}

/// The attribute store of a single component.
///
/// Explicitly declared values always win; otherwise the kind's fallback
/// table, then [`COMMON_FALLBACKS`], is consulted.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    values: BTreeMap<String, Value>,
    fallbacks: Fallbacks,
}

impl Attributes {
    /// Create an empty store resolving defaults from `fallbacks`.
    pub fn with_fallbacks(fallbacks: Fallbacks) -> Self {
        Self {
            values: BTreeMap::new(),
            fallbacks,
        }
    }

    /// Replace the fallback table, keeping declared values.
    pub fn set_fallbacks(&mut self, fallbacks: Fallbacks) {
        self.fallbacks = fallbacks;
    }

    /// Declare a value, replacing any previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove a declared value so that the fallback applies again.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Whether `name` was explicitly declared.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The declared value of `name`, or its documented default.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(v) = self.values.get(name) {
            return Some(v.clone());
        }
        self.fallback(name).map(Fallback::to_value)
    }

    /// Read `name` as text. Non-text values are not coerced.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            Some(_) => None,
            None => match self.fallback(name) {
                Some(Fallback::Text(s)) => Some(s),
                _ => None,
            },
        }
    }

    /// Read `name` as a flag; unreadable or missing flags are `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(|v| v.as_flag()).unwrap_or(false)
    }

    /// Read `name` as an integer.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.as_int())
    }

    /// Iterate over explicitly declared values in name order.
    pub fn declared(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn fallback(&self, name: &str) -> Option<Fallback> {
        self.fallbacks
            .iter()
            .chain(COMMON_FALLBACKS)
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }
}
