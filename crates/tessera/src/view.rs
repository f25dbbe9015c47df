//! Building component trees from declarative descriptions.
//!
//! A description is a nested JSON object:
//!
//! ```json
//! {
//!   "kind": "carousel",
//!   "id": "gallery",
//!   "attrs": { "activeIndex": 1, "styleClass": "wide" },
//!   "children": [
//!     { "kind": "carouselItem", "children": [{ "kind": "text", "attrs": { "value": "One" } }] }
//!   ]
//! }
//! ```
//!
//! `kind` names one of the built-in kinds (see [`Kind::name`]). A bare
//! string child is shorthand for a text node. An attribute set to `null` is
//! left unset, and a fractional number is kept as its decimal text.

use serde::Deserialize;
use std::collections::BTreeMap;
use tessera_core::{Kind, Node, Value};

/// Errors raised while turning a description into a tree.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The description is not valid JSON or does not have the expected shape.
    #[error("invalid view description: {0}")]
    Json(#[from] serde_json::Error),

    /// A `kind` does not name a built-in kind.
    #[error("unknown component kind `{0}`")]
    UnknownKind(String),
}

/// One node of a declarative description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ViewSpec {
    /// Shorthand for a text node.
    Text(String),
    Component {
        kind: String,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        attrs: BTreeMap<String, AttrValue>,
        #[serde(default)]
        children: Vec<ViewSpec>,
    },
}

/// An attribute as written in a description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null(()),
    Value(Value),
    Float(f64),
}

impl AttrValue {
    fn into_value(self) -> Option<Value> {
        match self {
            AttrValue::Null(()) => None,
            AttrValue::Value(value) => Some(value),
            AttrValue::Float(f) => Some(Value::Text(f.to_string())),
        }
    }
}

impl ViewSpec {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self, ViewError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the component tree.
    pub fn into_node(self) -> Result<Node, ViewError> {
        match self {
            ViewSpec::Text(text) => Ok(Node::text(text)),
            ViewSpec::Component {
                kind,
                id,
                attrs,
                children,
            } => {
                let kind = Kind::from_name(&kind).ok_or(ViewError::UnknownKind(kind))?;
                let mut node = Node::new(kind);
                if let Some(id) = id {
                    node.set_id(id);
                }
                for (name, value) in attrs {
                    if let Some(value) = value.into_value() {
                        node.attrs_mut().set(name, value);
                    }
                }
                for child in children {
                    node.push(child.into_node()?);
                }
                Ok(node)
            }
        }
    }
}

/// Parse `json` straight into a component tree.
pub fn parse(json: &str) -> Result<Node, ViewError> {
    ViewSpec::from_json(json)?.into_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_description_builds_tree() {
        let node = parse(
            r#"{
                "kind": "carousel",
                "id": "g",
                "attrs": { "activeIndex": 1, "wrap": false, "pause": "hover" },
                "children": [
                    { "kind": "carouselItem", "children": ["One"] },
                    { "kind": "carouselItem", "attrs": { "caption": "Two" } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(node.kind(), Kind::Carousel);
        assert_eq!(node.id(), Some("g"));
        assert_eq!(node.attrs().int("activeIndex"), Some(1));
        assert!(!node.attrs().flag("wrap"));
        assert_eq!(node.children_of_kind(Kind::Item).count(), 2);
        let first = &node.children()[0];
        assert_eq!(first.children()[0].kind(), Kind::Text);
        assert_eq!(first.children()[0].attrs().text("value"), Some("One"));
    }

    #[test]
    fn null_attributes_stay_unset_and_floats_keep_their_text() {
        let node = parse(
            r#"{ "kind": "carousel", "attrs": { "tooltip": null, "interval": null, "tooltipDelay": 1.5 } }"#,
        )
        .unwrap();
        assert!(!node.attrs().is_set("tooltip"));
        assert!(!node.attrs().is_set("interval"));
        assert_eq!(node.attrs().text("tooltipDelay"), Some("1.5"));
        assert_eq!(node.attrs().int("tooltipDelay"), None);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = parse(r#"{ "kind": "panel" }"#).unwrap_err();
        assert!(matches!(err, ViewError::UnknownKind(k) if k == "panel"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse("{ kind: "), Err(ViewError::Json(_))));
    }
}
